use async_trait::async_trait;
use gallery_model::{Artist, ArtistId};

use super::rows::{ArtistEntryRow, ArtistRow, convert_all};
use super::{PostgresCatalogueStore, translate};
use crate::database::ports::{ArtistRepository, NewArtist};
use crate::error::{CatalogueError, EntityKind, Result};
use crate::query::ArtistEntry;

const ARTIST_ENTRY_SELECT: &str = r#"
    SELECT
        a.id, a.name, a.email, a.phone, a.bio, a.profile_image, a.status, a.joined_at,
        COUNT(w.id) AS artwork_count,
        COALESCE(SUM(w.like_count), 0)::BIGINT AS total_likes
    FROM artists a
    LEFT JOIN artworks w ON w.artist_id = a.id
"#;

#[async_trait]
impl ArtistRepository for PostgresCatalogueStore {
    async fn insert_artist(&self, artist: NewArtist) -> Result<Artist> {
        let row = sqlx::query_as::<_, ArtistRow>(
            r#"
            INSERT INTO artists (name, email, phone, bio, profile_image, status, joined_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, phone, bio, profile_image, status, joined_at
            "#,
        )
        .bind(&artist.name)
        .bind(&artist.email)
        .bind(&artist.phone)
        .bind(&artist.bio)
        .bind(&artist.profile_image)
        .bind(artist.status.as_i16())
        .bind(artist.joined_at)
        .fetch_one(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to insert artist"))?;

        row.try_into()
    }

    async fn update_artist(&self, artist: &Artist) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE artists
            SET name = $2, email = $3, phone = $4, bio = $5,
                profile_image = $6, status = $7, joined_at = $8
            WHERE id = $1
            "#,
        )
        .bind(artist.id.get())
        .bind(&artist.name)
        .bind(&artist.email)
        .bind(&artist.phone)
        .bind(&artist.bio)
        .bind(&artist.profile_image)
        .bind(artist.status.as_i16())
        .bind(artist.joined_at)
        .execute(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to update artist"))?;

        if result.rows_affected() == 0 {
            return Err(CatalogueError::not_found(EntityKind::Artist, artist.id));
        }
        Ok(())
    }

    async fn delete_artist(&self, id: ArtistId) -> Result<()> {
        // artworks and their likes go with the artist via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id.get())
            .execute(self.pool())
            .await
            .map_err(|e| translate(e, "Failed to delete artist"))?;

        if result.rows_affected() == 0 {
            return Err(CatalogueError::not_found(EntityKind::Artist, id));
        }
        Ok(())
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>> {
        let row = sqlx::query_as::<_, ArtistRow>(
            r#"
            SELECT id, name, email, phone, bio, profile_image, status, joined_at
            FROM artists
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to load artist"))?;

        row.map(Artist::try_from).transpose()
    }

    async fn find_artist_by_email(&self, email: &str) -> Result<Option<Artist>> {
        let row = sqlx::query_as::<_, ArtistRow>(
            r#"
            SELECT id, name, email, phone, bio, profile_image, status, joined_at
            FROM artists
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email.trim())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to look up artist by email"))?;

        row.map(Artist::try_from).transpose()
    }

    async fn artist_entries(&self) -> Result<Vec<ArtistEntry>> {
        let sql = format!("{ARTIST_ENTRY_SELECT} GROUP BY a.id");
        let rows = sqlx::query_as::<_, ArtistEntryRow>(&sql)
            .fetch_all(self.pool())
            .await
            .map_err(|e| translate(e, "Failed to list artists"))?;

        convert_all(rows)
    }

    async fn artist_entry(&self, id: ArtistId) -> Result<Option<ArtistEntry>> {
        let sql = format!("{ARTIST_ENTRY_SELECT} WHERE a.id = $1 GROUP BY a.id");
        let row = sqlx::query_as::<_, ArtistEntryRow>(&sql)
            .bind(id.get())
            .fetch_optional(self.pool())
            .await
            .map_err(|e| translate(e, "Failed to load artist entry"))?;

        row.map(ArtistEntry::try_from).transpose()
    }
}
