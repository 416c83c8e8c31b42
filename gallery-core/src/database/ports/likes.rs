use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gallery_model::{ArtworkId, Like, LikeIdentity, UserId};

use crate::error::Result;
use crate::likes::{LikeOutcome, UnlikeOutcome};

/// Storage half of the like ledger.
///
/// `record_like` and `remove_like` are the atomic units: the existence check,
/// the ledger row and the artwork counter change happen under one per-artwork
/// serialization point, so concurrent calls can neither double count nor
/// lose an update.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Fails with `NotFound` for a missing artwork and `NotLikeable` when the
    /// artwork is not active. An existing like is reported, not an error.
    async fn record_like(
        &self,
        artwork_id: ArtworkId,
        identity: &LikeIdentity,
        liked_at: DateTime<Utc>,
    ) -> Result<LikeOutcome>;

    /// Removes the identity's like and decrements the counter, flooring at
    /// zero. Without a matching like nothing changes.
    async fn remove_like(
        &self,
        artwork_id: ArtworkId,
        identity: &LikeIdentity,
    ) -> Result<UnlikeOutcome>;

    async fn find_like(
        &self,
        artwork_id: ArtworkId,
        identity: &LikeIdentity,
    ) -> Result<Option<Like>>;

    /// Likes left by `user_id`, most recent first.
    async fn likes_by_user(&self, user_id: UserId) -> Result<Vec<Like>>;

    /// Resets the artwork's counter to the number of ledger rows and returns
    /// it.
    async fn recount_likes(&self, artwork_id: ArtworkId) -> Result<u32>;
}
