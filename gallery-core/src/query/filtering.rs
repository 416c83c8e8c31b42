//! Predicates over listing entries.
//!
//! Each filter struct compiles into one conjunctive test: every field that is
//! set must hold, unset fields are ignored. Free-text search is a
//! case-insensitive substring match over a fixed set of text fields per
//! entity:
//!
//! - artworks: title, description, artist name
//! - artists: name, bio
//! - exhibitions: name, description, location
//!
//! Visibility ([`ListingScope`]) is a separate check so admin views can list
//! hidden records with the same filters.

use gallery_model::{ArtistStatus, ArtworkStatus, ExhibitionStatus};

use super::types::{
    ArtistEntry, ArtistFilters, ArtworkEntry, ArtworkFilters, ExhibitionEntry,
    ExhibitionFilters, ListingScope,
};

/// A boolean test over one kind of entry.
pub trait Predicate<T> {
    fn matches(&self, entry: &T) -> bool;
}

/// Entries whose visibility depends on the listing scope.
pub trait Scoped {
    fn publicly_visible(&self) -> bool;
}

impl ListingScope {
    pub fn admits<T: Scoped>(&self, entry: &T) -> bool {
        match self {
            ListingScope::Public => entry.publicly_visible(),
            ListingScope::Admin => true,
        }
    }
}

/// Lower-cased, trimmed search needle. Blank input means no search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(SearchTerm(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    pub fn found_in_any(&self, fields: &[&str]) -> bool {
        fields.iter().any(|field| self.found_in(field))
    }
}

impl Predicate<ArtworkEntry> for ArtworkFilters {
    fn matches(&self, entry: &ArtworkEntry) -> bool {
        let artwork = &entry.artwork;

        if let Some(term) = SearchTerm::parse(self.search.as_deref())
            && !term.found_in_any(&[
                artwork.title.as_str(),
                artwork.description.as_str(),
                entry.artist_name.as_str(),
            ])
        {
            return false;
        }

        self.artwork_type.is_none_or(|ty| artwork.artwork_type == ty)
            && self.status.is_none_or(|status| artwork.status == status)
            && self.artist_id.is_none_or(|id| artwork.artist_id == id)
            && self
                .exhibition_id
                .is_none_or(|id| artwork.exhibition_id == Some(id))
            && (self.for_sale != Some(true) || artwork.for_sale)
    }
}

impl Predicate<ArtistEntry> for ArtistFilters {
    fn matches(&self, entry: &ArtistEntry) -> bool {
        let artist = &entry.artist;

        if let Some(term) = SearchTerm::parse(self.search.as_deref())
            && !term.found_in_any(&[artist.name.as_str(), artist.bio.as_str()])
        {
            return false;
        }

        self.status.is_none_or(|status| artist.status == status)
    }
}

impl Predicate<ExhibitionEntry> for ExhibitionFilters {
    fn matches(&self, entry: &ExhibitionEntry) -> bool {
        let exhibition = &entry.exhibition;

        if let Some(term) = SearchTerm::parse(self.search.as_deref())
            && !term.found_in_any(&[
                exhibition.name.as_str(),
                exhibition.description.as_str(),
                exhibition.location.as_str(),
            ])
        {
            return false;
        }

        self.status.is_none_or(|status| entry.status == status)
    }
}

impl Scoped for ArtworkEntry {
    fn publicly_visible(&self) -> bool {
        self.artwork.status == ArtworkStatus::Active
    }
}

impl Scoped for ArtistEntry {
    fn publicly_visible(&self) -> bool {
        self.artist.status == ArtistStatus::Active
    }
}

impl Scoped for ExhibitionEntry {
    fn publicly_visible(&self) -> bool {
        self.status != ExhibitionStatus::Cancelled
    }
}
