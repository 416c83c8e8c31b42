use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gallery_model::{Artist, ArtistId, ArtistStatus};

use crate::error::Result;
use crate::query::ArtistEntry;

/// Insert payload; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArtist {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub profile_image: String,
    pub status: ArtistStatus,
    pub joined_at: DateTime<Utc>,
}

#[async_trait]
pub trait ArtistRepository: Send + Sync {
    /// Fails with `Conflict` when the email (case-insensitive) is taken.
    async fn insert_artist(&self, artist: NewArtist) -> Result<Artist>;

    async fn update_artist(&self, artist: &Artist) -> Result<()>;

    /// Removes the artist together with their artworks and those artworks'
    /// likes.
    async fn delete_artist(&self, id: ArtistId) -> Result<()>;

    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>>;

    async fn find_artist_by_email(&self, email: &str) -> Result<Option<Artist>>;

    /// Every artist with artwork count and like total, unordered.
    async fn artist_entries(&self) -> Result<Vec<ArtistEntry>>;

    async fn artist_entry(&self, id: ArtistId) -> Result<Option<ArtistEntry>>;
}
