use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gallery_model::{ArtworkId, ArtworkStatus, Like, LikeIdentity, UserId};
use sqlx::{Postgres, Transaction};

use super::rows::LikeRow;
use super::{PostgresCatalogueStore, corrupt, counter, translate};
use crate::database::ports::LikeRepository;
use crate::error::{CatalogueError, EntityKind, Result};
use crate::likes::{LikeOutcome, UnlikeOutcome};

/// Row filter for "the like owned by this identity". `$2` is the user id and
/// `$3` the network address; a user identity never matches anonymous rows and
/// the other way round.
const IDENTITY_MATCH: &str = r#"
    artwork_id = $1
    AND (
        ($2::BIGINT IS NOT NULL AND user_id = $2)
        OR ($2::BIGINT IS NULL AND user_id IS NULL AND network_address = $3)
    )
"#;

fn identity_binds(identity: &LikeIdentity) -> (Option<i64>, Option<String>) {
    (
        identity.user_id().map(|id| id.get()),
        identity.network_address().map(str::to_string),
    )
}

/// Lock the artwork row for the rest of the transaction and return its status
/// and counter.
async fn lock_artwork(
    tx: &mut Transaction<'_, Postgres>,
    artwork_id: ArtworkId,
) -> Result<(ArtworkStatus, u32)> {
    let row: Option<(i16, i32)> =
        sqlx::query_as("SELECT status, like_count FROM artworks WHERE id = $1 FOR UPDATE")
            .bind(artwork_id.get())
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| translate(e, "Failed to lock artwork"))?;

    let Some((status, like_count)) = row else {
        return Err(CatalogueError::not_found(EntityKind::Artwork, artwork_id));
    };
    let status = ArtworkStatus::try_from(status).map_err(corrupt)?;
    Ok((status, counter(like_count)))
}

#[async_trait]
impl LikeRepository for PostgresCatalogueStore {
    async fn record_like(
        &self,
        artwork_id: ArtworkId,
        identity: &LikeIdentity,
        liked_at: DateTime<Utc>,
    ) -> Result<LikeOutcome> {
        let (user_id, address) = identity_binds(identity);

        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| translate(e, "Failed to start like transaction"))?;

        let (status, like_count) = lock_artwork(&mut tx, artwork_id).await?;
        if status != ArtworkStatus::Active {
            return Err(CatalogueError::NotLikeable { artwork_id, status });
        }

        let existing: Option<DateTime<Utc>> =
            sqlx::query_scalar(&format!("SELECT liked_at FROM likes WHERE {IDENTITY_MATCH}"))
                .bind(artwork_id.get())
                .bind(user_id)
                .bind(&address)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| translate(e, "Failed to check existing like"))?;

        if let Some(previous) = existing {
            tx.commit()
                .await
                .map_err(|e| translate(e, "Failed to close like transaction"))?;
            return Ok(LikeOutcome::AlreadyLiked {
                like_count,
                liked_at: previous,
            });
        }

        sqlx::query(
            r#"
            INSERT INTO likes (artwork_id, user_id, network_address, liked_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(artwork_id.get())
        .bind(user_id)
        .bind(&address)
        .bind(liked_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| translate(e, "Failed to record like"))?;

        let like_count: i32 = sqlx::query_scalar(
            "UPDATE artworks SET like_count = like_count + 1 WHERE id = $1 RETURNING like_count",
        )
        .bind(artwork_id.get())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| translate(e, "Failed to increment like counter"))?;

        tx.commit()
            .await
            .map_err(|e| translate(e, "Failed to commit like"))?;

        Ok(LikeOutcome::Liked {
            like_count: counter(like_count),
            liked_at,
        })
    }

    async fn remove_like(
        &self,
        artwork_id: ArtworkId,
        identity: &LikeIdentity,
    ) -> Result<UnlikeOutcome> {
        let (user_id, address) = identity_binds(identity);

        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| translate(e, "Failed to start unlike transaction"))?;

        let (_, current) = lock_artwork(&mut tx, artwork_id).await?;

        let removed: Option<i64> = sqlx::query_scalar(&format!(
            "DELETE FROM likes WHERE {IDENTITY_MATCH} RETURNING id"
        ))
        .bind(artwork_id.get())
        .bind(user_id)
        .bind(&address)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| translate(e, "Failed to remove like"))?;

        if removed.is_none() {
            tx.commit()
                .await
                .map_err(|e| translate(e, "Failed to close unlike transaction"))?;
            return Ok(UnlikeOutcome::NotLiked {
                like_count: current,
            });
        }

        let like_count: i32 = sqlx::query_scalar(
            r#"
            UPDATE artworks
            SET like_count = GREATEST(like_count - 1, 0)
            WHERE id = $1
            RETURNING like_count
            "#,
        )
        .bind(artwork_id.get())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| translate(e, "Failed to decrement like counter"))?;

        tx.commit()
            .await
            .map_err(|e| translate(e, "Failed to commit unlike"))?;

        Ok(UnlikeOutcome::Removed {
            like_count: counter(like_count),
        })
    }

    async fn find_like(
        &self,
        artwork_id: ArtworkId,
        identity: &LikeIdentity,
    ) -> Result<Option<Like>> {
        let (user_id, address) = identity_binds(identity);

        let row = sqlx::query_as::<_, LikeRow>(&format!(
            "SELECT id, artwork_id, user_id, network_address, liked_at FROM likes WHERE {IDENTITY_MATCH}"
        ))
        .bind(artwork_id.get())
        .bind(user_id)
        .bind(&address)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to look up like"))?;

        Ok(row.map(Like::from))
    }

    async fn likes_by_user(&self, user_id: UserId) -> Result<Vec<Like>> {
        let rows = sqlx::query_as::<_, LikeRow>(
            r#"
            SELECT id, artwork_id, user_id, network_address, liked_at
            FROM likes
            WHERE user_id = $1
            ORDER BY liked_at DESC, id DESC
            "#,
        )
        .bind(user_id.get())
        .fetch_all(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to list user likes"))?;

        Ok(rows.into_iter().map(Like::from).collect())
    }

    async fn recount_likes(&self, artwork_id: ArtworkId) -> Result<u32> {
        let like_count: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE artworks
            SET like_count = (SELECT COUNT(*) FROM likes WHERE artwork_id = $1)::INTEGER
            WHERE id = $1
            RETURNING like_count
            "#,
        )
        .bind(artwork_id.get())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| translate(e, "Failed to recount likes"))?;

        like_count
            .map(counter)
            .ok_or_else(|| CatalogueError::not_found(EntityKind::Artwork, artwork_id))
    }
}
