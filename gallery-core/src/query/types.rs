use chrono::NaiveDate;
use gallery_model::{
    Artist, ArtistId, ArtistStatus, Artwork, ArtworkStatus, ArtworkType, Exhibition,
    ExhibitionId, ExhibitionStatus,
};
use serde::{Deserialize, Serialize};

use super::pagination::PageRequest;
use super::sorting::{ArtistSort, ArtworkSort, ExhibitionSort};

/// An artwork as it appears in listings, joined with its artist's name so
/// free-text search can reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkEntry {
    pub artwork: Artwork,
    pub artist_name: String,
}

/// An artist with aggregates over the artworks they own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistEntry {
    pub artist: Artist,
    pub artwork_count: u32,
    pub total_likes: u64,
}

/// An exhibition with its status resolved against a specific day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitionEntry {
    pub exhibition: Exhibition,
    pub status: ExhibitionStatus,
    pub artwork_count: u32,
}

impl ExhibitionEntry {
    pub fn resolve(exhibition: Exhibition, artwork_count: u32, today: NaiveDate) -> Self {
        let status = exhibition.effective_status(today);
        Self {
            exhibition,
            status,
            artwork_count,
        }
    }
}

/// View-level visibility policy, applied before any caller filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingScope {
    /// Active artworks and artists, non-cancelled exhibitions.
    #[default]
    Public,
    /// Everything.
    Admin,
}

/// Optional artwork refinements. Every present field narrows the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkFilters {
    pub search: Option<String>,
    pub artwork_type: Option<ArtworkType>,
    pub status: Option<ArtworkStatus>,
    pub artist_id: Option<ArtistId>,
    pub exhibition_id: Option<ExhibitionId>,
    /// `Some(true)` keeps only artworks offered for sale. `Some(false)` does
    /// not restrict.
    pub for_sale: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistFilters {
    pub search: Option<String>,
    pub status: Option<ArtistStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExhibitionFilters {
    pub search: Option<String>,
    /// Compared against the status resolved for today.
    pub status: Option<ExhibitionStatus>,
}

/// Typed listing request: filters, ordering, page and visibility scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery<F, S> {
    pub filters: F,
    pub sort: S,
    pub page: PageRequest,
    pub scope: ListingScope,
}

pub type ArtworkQuery = ListingQuery<ArtworkFilters, ArtworkSort>;
pub type ArtistQuery = ListingQuery<ArtistFilters, ArtistSort>;
pub type ExhibitionQuery = ListingQuery<ExhibitionFilters, ExhibitionSort>;

impl<F, S> ListingQuery<F, S> {
    pub fn with_scope(mut self, scope: ListingScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}
