//! Query surface consumed by listing callers.

pub use super::builder::{ArtistQueryBuilder, ArtworkQueryBuilder, ExhibitionQueryBuilder};
pub use super::filtering::Predicate;
pub use super::pagination::{Page, PageRequest};
pub use super::run_listing;
pub use super::sorting::{ArtistSort, ArtworkSort, ExhibitionSort, sort_entries};
pub use super::types::{
    ArtistEntry, ArtistFilters, ArtistQuery, ArtworkEntry, ArtworkFilters, ArtworkQuery,
    ExhibitionEntry, ExhibitionFilters, ExhibitionQuery, ListingScope,
};
