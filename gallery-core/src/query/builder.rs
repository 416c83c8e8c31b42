use gallery_model::{ArtistId, ArtistStatus, ArtworkStatus, ArtworkType, ExhibitionId, ExhibitionStatus};

use super::pagination::PageRequest;
use super::sorting::{ArtistSort, ArtworkSort, ExhibitionSort};
use super::types::*;

/// Fluent API for building artwork listing queries
#[derive(Debug, Clone, Default)]
pub struct ArtworkQueryBuilder {
    query: ArtworkQuery,
}

impl ArtworkQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // === Filter methods ===

    /// Free-text search over title, description and artist name
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.query.filters.search = Some(text.into());
        self
    }

    pub fn of_type(mut self, artwork_type: ArtworkType) -> Self {
        self.query.filters.artwork_type = Some(artwork_type);
        self
    }

    pub fn with_status(mut self, status: ArtworkStatus) -> Self {
        self.query.filters.status = Some(status);
        self
    }

    pub fn by_artist(mut self, artist_id: ArtistId) -> Self {
        self.query.filters.artist_id = Some(artist_id);
        self
    }

    pub fn in_exhibition(mut self, exhibition_id: ExhibitionId) -> Self {
        self.query.filters.exhibition_id = Some(exhibition_id);
        self
    }

    /// Only artworks currently offered for sale
    pub fn for_sale(mut self) -> Self {
        self.query.filters.for_sale = Some(true);
        self
    }

    // === Sort, paging and scope ===

    pub fn sort_by(mut self, sort: ArtworkSort) -> Self {
        self.query.sort = sort;
        self
    }

    /// 1-based page; out-of-range values are clamped
    pub fn page(mut self, page: i64, page_size: i64) -> Self {
        self.query.page = PageRequest::new(page, page_size);
        self
    }

    /// Lift the public visibility restriction
    pub fn admin(mut self) -> Self {
        self.query.scope = ListingScope::Admin;
        self
    }

    pub fn build(self) -> ArtworkQuery {
        self.query
    }
}

/// Fluent API for building artist listing queries
#[derive(Debug, Clone, Default)]
pub struct ArtistQueryBuilder {
    query: ArtistQuery,
}

impl ArtistQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search over name and bio
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.query.filters.search = Some(text.into());
        self
    }

    pub fn with_status(mut self, status: ArtistStatus) -> Self {
        self.query.filters.status = Some(status);
        self
    }

    pub fn sort_by(mut self, sort: ArtistSort) -> Self {
        self.query.sort = sort;
        self
    }

    pub fn page(mut self, page: i64, page_size: i64) -> Self {
        self.query.page = PageRequest::new(page, page_size);
        self
    }

    pub fn admin(mut self) -> Self {
        self.query.scope = ListingScope::Admin;
        self
    }

    pub fn build(self) -> ArtistQuery {
        self.query
    }
}

/// Fluent API for building exhibition listing queries
#[derive(Debug, Clone, Default)]
pub struct ExhibitionQueryBuilder {
    query: ExhibitionQuery,
}

impl ExhibitionQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search over name, description and location
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.query.filters.search = Some(text.into());
        self
    }

    pub fn with_status(mut self, status: ExhibitionStatus) -> Self {
        self.query.filters.status = Some(status);
        self
    }

    pub fn sort_by(mut self, sort: ExhibitionSort) -> Self {
        self.query.sort = sort;
        self
    }

    pub fn page(mut self, page: i64, page_size: i64) -> Self {
        self.query.page = PageRequest::new(page, page_size);
        self
    }

    pub fn admin(mut self) -> Self {
        self.query.scope = ListingScope::Admin;
        self
    }

    pub fn build(self) -> ExhibitionQuery {
        self.query
    }
}

// === Convenience constructors ===

impl ArtworkQuery {
    /// Public listing of one artist's artworks, most liked first
    pub fn artist_portfolio(artist_id: ArtistId, page_size: u32) -> Self {
        ArtworkQueryBuilder::new()
            .by_artist(artist_id)
            .sort_by(ArtworkSort::MostLiked)
            .page(1, i64::from(page_size))
            .build()
    }

    /// Simple public search
    pub fn search(text: impl Into<String>) -> Self {
        ArtworkQueryBuilder::new().search(text).build()
    }
}

impl ExhibitionQuery {
    /// Public listing in opening order
    pub fn programme(page_size: u32) -> Self {
        ExhibitionQueryBuilder::new()
            .sort_by(ExhibitionSort::StartDate)
            .page(1, i64::from(page_size))
            .build()
    }
}
