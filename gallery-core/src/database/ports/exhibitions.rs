use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use gallery_model::{Exhibition, ExhibitionId, ExhibitionStatus};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct NewExhibition {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub max_artworks: u32,
    pub status: ExhibitionStatus,
    pub banner_image: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait ExhibitionRepository: Send + Sync {
    async fn insert_exhibition(&self, exhibition: NewExhibition) -> Result<Exhibition>;

    async fn update_exhibition(&self, exhibition: &Exhibition) -> Result<()>;

    /// Removes the exhibition. Artworks hung in it are kept and detached.
    async fn delete_exhibition(&self, id: ExhibitionId) -> Result<()>;

    async fn get_exhibition(&self, id: ExhibitionId) -> Result<Option<Exhibition>>;

    /// Every exhibition paired with the number of artworks hung in it.
    async fn exhibitions_with_counts(&self) -> Result<Vec<(Exhibition, u32)>>;
}
