use async_trait::async_trait;
use gallery_model::{Artwork, ArtworkId, ExhibitionId};

use super::rows::{ArtworkEntryRow, ArtworkRow, convert_all};
use super::{PostgresCatalogueStore, counter, translate};
use crate::database::ports::{ArtworkRepository, NewArtwork};
use crate::error::{CatalogueError, EntityKind, Result};
use crate::query::ArtworkEntry;

const ARTWORK_ENTRY_SELECT: &str = r#"
    SELECT
        w.id, w.title, w.description, w.image, w.artwork_type, w.status,
        w.like_count, w.price, w.for_sale, w.created_at, w.artist_id, w.exhibition_id,
        a.name AS artist_name
    FROM artworks w
    JOIN artists a ON a.id = w.artist_id
"#;

#[async_trait]
impl ArtworkRepository for PostgresCatalogueStore {
    async fn insert_artwork(&self, artwork: NewArtwork) -> Result<Artwork> {
        let row = sqlx::query_as::<_, ArtworkRow>(
            r#"
            INSERT INTO artworks (
                title, description, image, artwork_type, status, like_count,
                price, for_sale, created_at, artist_id, exhibition_id
            )
            VALUES ($1, $2, $3, $4, $5, 0, $6, $7, $8, $9, $10)
            RETURNING
                id, title, description, image, artwork_type, status, like_count,
                price, for_sale, created_at, artist_id, exhibition_id
            "#,
        )
        .bind(&artwork.title)
        .bind(&artwork.description)
        .bind(&artwork.image)
        .bind(artwork.artwork_type.as_i16())
        .bind(artwork.status.as_i16())
        .bind(artwork.price)
        .bind(artwork.for_sale)
        .bind(artwork.created_at)
        .bind(artwork.artist_id.get())
        .bind(artwork.exhibition_id.map(|id| id.get()))
        .fetch_one(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to insert artwork"))?;

        row.try_into()
    }

    async fn update_artwork(&self, artwork: &Artwork) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE artworks
            SET title = $2, description = $3, image = $4, artwork_type = $5,
                status = $6, price = $7, for_sale = $8, artist_id = $9,
                exhibition_id = $10
            WHERE id = $1
            "#,
        )
        .bind(artwork.id.get())
        .bind(&artwork.title)
        .bind(&artwork.description)
        .bind(&artwork.image)
        .bind(artwork.artwork_type.as_i16())
        .bind(artwork.status.as_i16())
        .bind(artwork.price)
        .bind(artwork.for_sale)
        .bind(artwork.artist_id.get())
        .bind(artwork.exhibition_id.map(|id| id.get()))
        .execute(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to update artwork"))?;

        if result.rows_affected() == 0 {
            return Err(CatalogueError::not_found(EntityKind::Artwork, artwork.id));
        }
        Ok(())
    }

    async fn delete_artwork(&self, id: ArtworkId) -> Result<()> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id.get())
            .execute(self.pool())
            .await
            .map_err(|e| translate(e, "Failed to delete artwork"))?;

        if result.rows_affected() == 0 {
            return Err(CatalogueError::not_found(EntityKind::Artwork, id));
        }
        Ok(())
    }

    async fn get_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>> {
        let row = sqlx::query_as::<_, ArtworkRow>(
            r#"
            SELECT
                id, title, description, image, artwork_type, status, like_count,
                price, for_sale, created_at, artist_id, exhibition_id
            FROM artworks
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to load artwork"))?;

        row.map(Artwork::try_from).transpose()
    }

    async fn artwork_entries(&self) -> Result<Vec<ArtworkEntry>> {
        let rows = sqlx::query_as::<_, ArtworkEntryRow>(ARTWORK_ENTRY_SELECT)
            .fetch_all(self.pool())
            .await
            .map_err(|e| translate(e, "Failed to list artworks"))?;

        convert_all(rows)
    }

    async fn artwork_entry(&self, id: ArtworkId) -> Result<Option<ArtworkEntry>> {
        let sql = format!("{ARTWORK_ENTRY_SELECT} WHERE w.id = $1");
        let row = sqlx::query_as::<_, ArtworkEntryRow>(&sql)
            .bind(id.get())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| translate(e, "Failed to load artwork entry"))?;

        row.map(ArtworkEntry::try_from).transpose()
    }

    async fn count_artworks_in_exhibition(&self, id: ExhibitionId) -> Result<u32> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM artworks WHERE exhibition_id = $1")
                .bind(id.get())
                .fetch_one(self.pool())
                .await
                .map_err(|e| translate(e, "Failed to count exhibition artworks"))?;

        Ok(counter(count))
    }
}
