use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gallery_model::{ArtistId, Artwork, ArtworkId, ArtworkStatus, ArtworkType, ExhibitionId};
use rust_decimal::Decimal;

use crate::error::Result;
use crate::query::ArtworkEntry;

/// Insert payload; the store assigns the id and starts the like counter at
/// zero.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArtwork {
    pub title: String,
    pub description: String,
    pub image: String,
    pub artwork_type: ArtworkType,
    pub status: ArtworkStatus,
    pub price: Option<Decimal>,
    pub for_sale: bool,
    pub created_at: DateTime<Utc>,
    pub artist_id: ArtistId,
    pub exhibition_id: Option<ExhibitionId>,
}

#[async_trait]
pub trait ArtworkRepository: Send + Sync {
    /// Fails with `NotFound` when the artist or exhibition does not exist.
    async fn insert_artwork(&self, artwork: NewArtwork) -> Result<Artwork>;

    /// Writes every editable column. The like counter is owned by the like
    /// ledger and is left untouched.
    async fn update_artwork(&self, artwork: &Artwork) -> Result<()>;

    /// Removes the artwork and its likes.
    async fn delete_artwork(&self, id: ArtworkId) -> Result<()>;

    async fn get_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>>;

    /// Every artwork joined with its artist's name, unordered.
    async fn artwork_entries(&self) -> Result<Vec<ArtworkEntry>>;

    async fn artwork_entry(&self, id: ArtworkId) -> Result<Option<ArtworkEntry>>;

    async fn count_artworks_in_exhibition(&self, id: ExhibitionId) -> Result<u32>;
}
