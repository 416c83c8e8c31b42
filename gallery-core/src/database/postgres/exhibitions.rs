use async_trait::async_trait;
use gallery_model::{Exhibition, ExhibitionId};

use super::rows::{ExhibitionCountRow, ExhibitionRow, convert_all};
use super::{PostgresCatalogueStore, translate};
use crate::database::ports::{ExhibitionRepository, NewExhibition};
use crate::error::{CatalogueError, EntityKind, Result};

fn capacity(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[async_trait]
impl ExhibitionRepository for PostgresCatalogueStore {
    async fn insert_exhibition(&self, exhibition: NewExhibition) -> Result<Exhibition> {
        let row = sqlx::query_as::<_, ExhibitionRow>(
            r#"
            INSERT INTO exhibitions (
                name, description, start_date, end_date, location,
                max_artworks, status, banner_image, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                id, name, description, start_date, end_date, location,
                max_artworks, status, banner_image, created_at
            "#,
        )
        .bind(&exhibition.name)
        .bind(&exhibition.description)
        .bind(exhibition.start_date)
        .bind(exhibition.end_date)
        .bind(&exhibition.location)
        .bind(capacity(exhibition.max_artworks))
        .bind(exhibition.status.as_i16())
        .bind(&exhibition.banner_image)
        .bind(exhibition.created_at)
        .fetch_one(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to insert exhibition"))?;

        row.try_into()
    }

    async fn update_exhibition(&self, exhibition: &Exhibition) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE exhibitions
            SET name = $2, description = $3, start_date = $4, end_date = $5,
                location = $6, max_artworks = $7, status = $8, banner_image = $9
            WHERE id = $1
            "#,
        )
        .bind(exhibition.id.get())
        .bind(&exhibition.name)
        .bind(&exhibition.description)
        .bind(exhibition.start_date)
        .bind(exhibition.end_date)
        .bind(&exhibition.location)
        .bind(capacity(exhibition.max_artworks))
        .bind(exhibition.status.as_i16())
        .bind(&exhibition.banner_image)
        .execute(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to update exhibition"))?;

        if result.rows_affected() == 0 {
            return Err(CatalogueError::not_found(EntityKind::Exhibition, exhibition.id));
        }
        Ok(())
    }

    async fn delete_exhibition(&self, id: ExhibitionId) -> Result<()> {
        // hung artworks are detached by ON DELETE SET NULL
        let result = sqlx::query("DELETE FROM exhibitions WHERE id = $1")
            .bind(id.get())
            .execute(self.pool())
            .await
            .map_err(|e| translate(e, "Failed to delete exhibition"))?;

        if result.rows_affected() == 0 {
            return Err(CatalogueError::not_found(EntityKind::Exhibition, id));
        }
        Ok(())
    }

    async fn get_exhibition(&self, id: ExhibitionId) -> Result<Option<Exhibition>> {
        let row = sqlx::query_as::<_, ExhibitionRow>(
            r#"
            SELECT
                id, name, description, start_date, end_date, location,
                max_artworks, status, banner_image, created_at
            FROM exhibitions
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to load exhibition"))?;

        row.map(Exhibition::try_from).transpose()
    }

    async fn exhibitions_with_counts(&self) -> Result<Vec<(Exhibition, u32)>> {
        let rows = sqlx::query_as::<_, ExhibitionCountRow>(
            r#"
            SELECT
                e.id, e.name, e.description, e.start_date, e.end_date, e.location,
                e.max_artworks, e.status, e.banner_image, e.created_at,
                COUNT(w.id) AS artwork_count
            FROM exhibitions e
            LEFT JOIN artworks w ON w.exhibition_id = e.id
            GROUP BY e.id
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to list exhibitions"))?;

        convert_all(rows)
    }
}
