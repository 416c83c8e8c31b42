use std::sync::Arc;

use chrono::NaiveDate;
use gallery_model::{
    Exhibition, ExhibitionId, ExhibitionStatus,
    exhibition::{DEFAULT_BANNER_IMAGE, DEFAULT_MAX_ARTWORKS},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::validation::Violations;
use crate::clock::Clock;
use crate::database::ports::{CatalogueStore, NewExhibition};
use crate::error::{CatalogueError, EntityKind, Result};

fn default_max_artworks() -> u32 {
    DEFAULT_MAX_ARTWORKS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionForm {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_max_artworks")]
    pub max_artworks: u32,
    #[serde(default)]
    pub banner_image: Option<String>,
}

impl ExhibitionForm {
    fn violations(&self) -> Violations {
        let mut violations = Violations::new();
        violations
            .length("Name", &self.name, 3, 200)
            .length("Description", &self.description, 10, 1000)
            .max_length("Location", &self.location, 200)
            .check(
                (1..=1000).contains(&self.max_artworks),
                "Max artworks must be between 1 and 1000",
            )
            .check(
                self.end_date > self.start_date,
                "End date must be after start date",
            );
        violations
    }

    pub fn validate(&self) -> Result<()> {
        self.violations().into_result()
    }

    /// New exhibitions additionally may not open in the past.
    pub fn validate_new(&self, today: NaiveDate) -> Result<()> {
        let mut violations = self.violations();
        violations.check(
            self.start_date >= today,
            "Start date cannot be in the past",
        );
        violations.into_result()
    }

    fn banner(&self) -> String {
        self.banner_image
            .as_deref()
            .map(str::trim)
            .filter(|image| !image.is_empty())
            .unwrap_or(DEFAULT_BANNER_IMAGE)
            .to_string()
    }
}

#[derive(Debug, Clone)]
pub struct ExhibitionService {
    store: Arc<dyn CatalogueStore>,
    clock: Arc<dyn Clock>,
}

impl ExhibitionService {
    pub fn new(store: Arc<dyn CatalogueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn get(&self, id: ExhibitionId) -> Result<Exhibition> {
        self.store
            .get_exhibition(id)
            .await?
            .ok_or_else(|| CatalogueError::not_found(EntityKind::Exhibition, id))
    }

    pub async fn create(&self, form: ExhibitionForm) -> Result<Exhibition> {
        let today = self.clock.today();
        form.validate_new(today)?;

        let status = if form.start_date > today {
            ExhibitionStatus::Upcoming
        } else {
            ExhibitionStatus::Active
        };

        let exhibition = self
            .store
            .insert_exhibition(NewExhibition {
                name: form.name.trim().to_string(),
                description: form.description.trim().to_string(),
                start_date: form.start_date,
                end_date: form.end_date,
                location: form.location.trim().to_string(),
                max_artworks: form.max_artworks,
                status,
                banner_image: form.banner(),
                created_at: self.clock.now(),
            })
            .await?;

        info!(exhibition_id = %exhibition.id, name = %exhibition.name, "exhibition created");
        Ok(exhibition)
    }

    /// Rewrites the editable fields. Capacity may not drop below the number of
    /// artworks already hung; a cancelled exhibition stays cancelled.
    pub async fn update(&self, id: ExhibitionId, form: ExhibitionForm) -> Result<Exhibition> {
        let mut exhibition = self.get(id).await?;
        let mut violations = form.violations();

        let placed = self.store.count_artworks_in_exhibition(id).await?;
        violations.check(
            form.max_artworks >= placed,
            format!("Max artworks cannot be lower than the {placed} artworks already placed"),
        );
        violations.into_result()?;

        exhibition.name = form.name.trim().to_string();
        exhibition.description = form.description.trim().to_string();
        exhibition.start_date = form.start_date;
        exhibition.end_date = form.end_date;
        exhibition.location = form.location.trim().to_string();
        exhibition.max_artworks = form.max_artworks;
        if form.banner_image.is_some() {
            exhibition.banner_image = form.banner();
        }
        exhibition.refresh_status(self.clock.today());

        self.store.update_exhibition(&exhibition).await?;
        info!(exhibition_id = %id, status = %exhibition.status, "exhibition updated");
        Ok(exhibition)
    }

    pub async fn cancel(&self, id: ExhibitionId) -> Result<Exhibition> {
        let mut exhibition = self.get(id).await?;
        if exhibition.status == ExhibitionStatus::Cancelled {
            warn!(exhibition_id = %id, "exhibition already cancelled");
            return Ok(exhibition);
        }

        exhibition.cancel();
        self.store.update_exhibition(&exhibition).await?;
        info!(exhibition_id = %id, "exhibition cancelled");
        Ok(exhibition)
    }

    /// Deletes the exhibition. Its artworks stay in the catalogue, detached.
    pub async fn delete(&self, id: ExhibitionId) -> Result<()> {
        self.store.delete_exhibition(id).await?;
        info!(exhibition_id = %id, "exhibition deleted");
        Ok(())
    }
}
