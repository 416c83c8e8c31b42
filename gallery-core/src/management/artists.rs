use std::sync::Arc;

use gallery_model::{Artist, ArtistId, ArtistStatus, artist::DEFAULT_PROFILE_IMAGE};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::validation::{Violations, is_valid_phone};
use crate::clock::Clock;
use crate::database::ports::{CatalogueStore, NewArtist};
use crate::error::{CatalogueError, EntityKind, Result};

/// Fields an editor supplies for an artist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtistForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub profile_image: Option<String>,
    /// Left unchanged on update when absent; new artists start active.
    pub status: Option<ArtistStatus>,
}

impl ArtistForm {
    pub fn validate(&self) -> Result<()> {
        let mut violations = Violations::new();
        violations
            .length("Name", &self.name, 2, 100)
            .email(&self.email)
            .check(
                self.phone.trim().is_empty() || is_valid_phone(&self.phone),
                "Phone number must look like +968 XXXX XXXX",
            )
            .max_length("Bio", &self.bio, 500);
        violations.into_result()
    }
}

fn image_or_default(image: Option<&str>) -> String {
    image
        .map(str::trim)
        .filter(|image| !image.is_empty())
        .unwrap_or(DEFAULT_PROFILE_IMAGE)
        .to_string()
}

#[derive(Debug, Clone)]
pub struct ArtistService {
    store: Arc<dyn CatalogueStore>,
    clock: Arc<dyn Clock>,
}

impl ArtistService {
    pub fn new(store: Arc<dyn CatalogueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    async fn ensure_email_free(&self, email: &str, except: Option<ArtistId>) -> Result<()> {
        if let Some(existing) = self.store.find_artist_by_email(email).await?
            && except != Some(existing.id)
        {
            warn!(artist_id = %existing.id, "artist email already registered");
            return Err(CatalogueError::Conflict(
                "An artist with this email already exists".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn get(&self, id: ArtistId) -> Result<Artist> {
        self.store
            .get_artist(id)
            .await?
            .ok_or_else(|| CatalogueError::not_found(EntityKind::Artist, id))
    }

    pub async fn create(&self, form: ArtistForm) -> Result<Artist> {
        form.validate()?;
        self.ensure_email_free(&form.email, None).await?;

        let artist = self
            .store
            .insert_artist(NewArtist {
                name: form.name.trim().to_string(),
                email: form.email.trim().to_string(),
                phone: form.phone.trim().to_string(),
                bio: form.bio.trim().to_string(),
                profile_image: image_or_default(form.profile_image.as_deref()),
                status: ArtistStatus::Active,
                joined_at: self.clock.now(),
            })
            .await?;

        info!(artist_id = %artist.id, name = %artist.name, "artist created");
        Ok(artist)
    }

    pub async fn update(&self, id: ArtistId, form: ArtistForm) -> Result<Artist> {
        let mut artist = self.get(id).await?;
        form.validate()?;
        self.ensure_email_free(&form.email, Some(id)).await?;

        artist.name = form.name.trim().to_string();
        artist.email = form.email.trim().to_string();
        artist.phone = form.phone.trim().to_string();
        artist.bio = form.bio.trim().to_string();
        if let Some(image) = form.profile_image.as_deref() {
            artist.profile_image = image_or_default(Some(image));
        }
        if let Some(status) = form.status {
            artist.status = status;
        }

        self.store.update_artist(&artist).await?;
        info!(artist_id = %id, "artist updated");
        Ok(artist)
    }

    pub async fn set_status(&self, id: ArtistId, status: ArtistStatus) -> Result<Artist> {
        let mut artist = self.get(id).await?;
        artist.status = status;
        self.store.update_artist(&artist).await?;
        info!(artist_id = %id, %status, "artist status changed");
        Ok(artist)
    }

    /// Removes the artist together with their artworks and those artworks'
    /// likes.
    pub async fn delete(&self, id: ArtistId) -> Result<()> {
        self.store.delete_artist(id).await?;
        info!(artist_id = %id, "artist deleted");
        Ok(())
    }
}
