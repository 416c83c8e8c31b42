//! Catalogue listing engine: scope policy, predicates, ordering and paging.
//!
//! A listing runs in four steps over entries loaded from the store:
//! visibility scope, filter predicate, sort with id tie-break, page slice.

pub mod builder;
pub mod filtering;
pub mod pagination;
pub mod prelude;
pub mod sorting;
pub mod types;

pub use builder::{ArtistQueryBuilder, ArtworkQueryBuilder, ExhibitionQueryBuilder};
pub use filtering::{Predicate, Scoped, SearchTerm};
pub use pagination::{API_PAGE_SIZE, DEFAULT_PAGE_SIZE, Page, PageRequest, paginate};
pub use sorting::*;
pub use types::*;

/// Run the listing pipeline over `entries`.
pub fn run_listing<T, F, S>(entries: Vec<T>, query: &ListingQuery<F, S>) -> Page<T>
where
    T: Scoped + SortableEntry,
    F: Predicate<T>,
    S: EntryOrder<T>,
{
    let mut matched: Vec<T> = entries
        .into_iter()
        .filter(|entry| query.scope.admits(entry) && query.filters.matches(entry))
        .collect();

    sort_entries(&mut matched, query.sort);
    paginate(matched, query.page)
}
