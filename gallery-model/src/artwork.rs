use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::ids::{ArtistId, ArtworkId, ExhibitionId};

/// Image used when an artwork is created without one.
pub const DEFAULT_ARTWORK_IMAGE: &str = "/images/artworks/default.svg";

/// Artworks younger than this are flagged as new in listings.
pub const NEW_ARTWORK_WINDOW_DAYS: i64 = 7;

catalogue_enum! {
    /// Medium of an artwork
    pub enum ArtworkType as "artwork type" {
        Painting = 0,
        Photography = 1,
        HandmadeCraft = 2,
        Sculpture = 3,
        DigitalArt = 4,
    }
}

catalogue_enum! {
    /// Sales/visibility state of an artwork
    pub enum ArtworkStatus as "artwork status" {
        Active = 0,
        Pending = 1,
        Sold = 2,
        Archived = 3,
    }
}

impl Default for ArtworkStatus {
    fn default() -> Self {
        ArtworkStatus::Active
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub artwork_type: ArtworkType,
    pub status: ArtworkStatus,
    /// Never negative; maintained by the like ledger.
    pub like_count: u32,
    pub price: Option<Decimal>,
    pub for_sale: bool,
    pub created_at: DateTime<Utc>,
    pub artist_id: ArtistId,
    pub exhibition_id: Option<ExhibitionId>,
}

impl Artwork {
    /// Only active artworks accept likes.
    pub fn can_be_liked(&self) -> bool {
        self.status == ArtworkStatus::Active
    }

    pub fn is_new(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at <= Duration::days(NEW_ARTWORK_WINDOW_DAYS)
    }

    /// Price used for ordering; an absent price sorts as zero.
    pub fn sort_price(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO)
    }

    pub fn mark_as_sold(&mut self) {
        self.status = ArtworkStatus::Sold;
        self.for_sale = false;
    }

    pub fn increment_likes(&mut self) -> u32 {
        self.like_count = self.like_count.saturating_add(1);
        self.like_count
    }

    /// Decrements the like counter, flooring at zero.
    pub fn decrement_likes(&mut self) -> u32 {
        self.like_count = self.like_count.saturating_sub(1);
        self.like_count
    }
}
