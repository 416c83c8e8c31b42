use std::sync::Arc;

use gallery_model::{
    ArtistId, Artwork, ArtworkId, ArtworkStatus, ArtworkType, ExhibitionId, ExhibitionStatus,
    artwork::DEFAULT_ARTWORK_IMAGE,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::validation::{MAX_PRICE, Violations};
use crate::clock::Clock;
use crate::database::ports::{CatalogueStore, NewArtwork};
use crate::error::{CatalogueError, EntityKind, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkForm {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub artwork_type: ArtworkType,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub for_sale: bool,
    pub artist_id: ArtistId,
    #[serde(default)]
    pub exhibition_id: Option<ExhibitionId>,
}

impl ArtworkForm {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Violations::new();
        violations
            .length("Title", &self.title, 3, 150)
            .length("Description", &self.description, 10, 1000);
        if let Some(price) = self.price {
            violations.check(
                price >= Decimal::ZERO && price <= MAX_PRICE,
                format!("Price must be between 0 and {MAX_PRICE}"),
            );
        }
        violations.into_result()
    }

    /// A price only sticks to artworks that are for sale, and only when
    /// positive.
    pub fn effective_price(&self) -> Option<Decimal> {
        self.price
            .filter(|price| self.for_sale && *price > Decimal::ZERO)
    }

    fn image(&self) -> String {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|image| !image.is_empty())
            .unwrap_or(DEFAULT_ARTWORK_IMAGE)
            .to_string()
    }
}

#[derive(Debug, Clone)]
pub struct ArtworkService {
    store: Arc<dyn CatalogueStore>,
    clock: Arc<dyn Clock>,
}

impl ArtworkService {
    pub fn new(store: Arc<dyn CatalogueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn get(&self, id: ArtworkId) -> Result<Artwork> {
        self.store
            .get_artwork(id)
            .await?
            .ok_or_else(|| CatalogueError::not_found(EntityKind::Artwork, id))
    }

    async fn check_links(&self, form: &ArtworkForm, current: Option<&Artwork>) -> Result<()> {
        if self.store.get_artist(form.artist_id).await?.is_none() {
            return Err(CatalogueError::not_found(EntityKind::Artist, form.artist_id));
        }

        let Some(exhibition_id) = form.exhibition_id else {
            return Ok(());
        };
        let exhibition = self
            .store
            .get_exhibition(exhibition_id)
            .await?
            .ok_or_else(|| CatalogueError::not_found(EntityKind::Exhibition, exhibition_id))?;

        if current.is_some_and(|artwork| artwork.exhibition_id == Some(exhibition_id)) {
            return Ok(());
        }

        if exhibition.status == ExhibitionStatus::Cancelled {
            return Err(CatalogueError::invalid(
                "Artworks cannot be added to a cancelled exhibition",
            ));
        }

        let placed = self.store.count_artworks_in_exhibition(exhibition_id).await?;
        if !exhibition.has_capacity(placed) {
            warn!(
                exhibition_id = %exhibition_id,
                placed,
                max = exhibition.max_artworks,
                "exhibition is full"
            );
            return Err(CatalogueError::Conflict(format!(
                "Exhibition '{}' already holds {} artworks",
                exhibition.name, exhibition.max_artworks
            )));
        }
        Ok(())
    }

    pub async fn create(&self, form: ArtworkForm) -> Result<Artwork> {
        form.validate()?;
        self.check_links(&form, None).await?;

        let artwork = self
            .store
            .insert_artwork(NewArtwork {
                title: form.title.trim().to_string(),
                description: form.description.trim().to_string(),
                image: form.image(),
                artwork_type: form.artwork_type,
                status: ArtworkStatus::Active,
                price: form.effective_price(),
                for_sale: form.for_sale,
                created_at: self.clock.now(),
                artist_id: form.artist_id,
                exhibition_id: form.exhibition_id,
            })
            .await?;

        info!(artwork_id = %artwork.id, artist_id = %artwork.artist_id, "artwork created");
        Ok(artwork)
    }

    /// Rewrites the editable fields. Status, likes and creation time are kept.
    pub async fn update(&self, id: ArtworkId, form: ArtworkForm) -> Result<Artwork> {
        let mut artwork = self.get(id).await?;
        form.validate()?;
        self.check_links(&form, Some(&artwork)).await?;

        artwork.title = form.title.trim().to_string();
        artwork.description = form.description.trim().to_string();
        if form.image.is_some() {
            artwork.image = form.image();
        }
        artwork.artwork_type = form.artwork_type;
        artwork.price = form.effective_price();
        artwork.for_sale = form.for_sale;
        artwork.artist_id = form.artist_id;
        artwork.exhibition_id = form.exhibition_id;

        self.store.update_artwork(&artwork).await?;
        info!(artwork_id = %id, "artwork updated");
        Ok(artwork)
    }

    pub async fn set_status(&self, id: ArtworkId, status: ArtworkStatus) -> Result<Artwork> {
        let mut artwork = self.get(id).await?;
        artwork.status = status;
        if status == ArtworkStatus::Sold {
            artwork.for_sale = false;
        }
        self.store.update_artwork(&artwork).await?;
        info!(artwork_id = %id, %status, "artwork status changed");
        Ok(artwork)
    }

    pub async fn mark_sold(&self, id: ArtworkId) -> Result<Artwork> {
        let mut artwork = self.get(id).await?;
        artwork.mark_as_sold();
        self.store.update_artwork(&artwork).await?;
        info!(artwork_id = %id, "artwork sold");
        Ok(artwork)
    }

    pub async fn delete(&self, id: ArtworkId) -> Result<()> {
        self.store.delete_artwork(id).await?;
        info!(artwork_id = %id, "artwork deleted");
        Ok(())
    }
}
