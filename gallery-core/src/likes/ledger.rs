use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use gallery_model::{ArtworkId, LikeIdentity, UserId, like::MAX_NETWORK_ADDRESS_LEN};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::{LikeOutcome, UnlikeOutcome};
use crate::clock::Clock;
use crate::database::ports::CatalogueStore;
use crate::error::{CatalogueError, Result};
use crate::query::ArtworkEntry;

/// An artwork from a user's like history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedArtwork {
    pub entry: ArtworkEntry,
    pub liked_at: DateTime<Utc>,
}

/// Service front of the like ledger. The atomic check-insert-increment lives
/// in the store; this layer resolves policy and logging.
#[derive(Debug, Clone)]
pub struct LikeLedger {
    store: Arc<dyn CatalogueStore>,
    clock: Arc<dyn Clock>,
    allow_anonymous: bool,
}

impl LikeLedger {
    pub fn new(store: Arc<dyn CatalogueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            allow_anonymous: true,
        }
    }

    /// Whether visitors without an account may like artworks.
    pub fn with_anonymous_likes(mut self, allowed: bool) -> Self {
        self.allow_anonymous = allowed;
        self
    }

    fn check_identity(&self, identity: &LikeIdentity) -> Result<()> {
        if !self.allow_anonymous && identity.user_id().is_none() {
            return Err(CatalogueError::invalid("sign in to like artworks"));
        }
        if let Some(address) = identity.network_address()
            && address.chars().count() > MAX_NETWORK_ADDRESS_LEN
        {
            return Err(CatalogueError::invalid(format!(
                "network address cannot exceed {MAX_NETWORK_ADDRESS_LEN} characters"
            )));
        }
        Ok(())
    }

    /// Like `artwork_id` as `identity`. Repeating the call is a no-op that
    /// reports [`LikeOutcome::AlreadyLiked`].
    pub async fn try_like(
        &self,
        artwork_id: ArtworkId,
        identity: &LikeIdentity,
    ) -> Result<LikeOutcome> {
        self.check_identity(identity)?;

        let outcome = self
            .store
            .record_like(artwork_id, identity, self.clock.now())
            .await;

        match &outcome {
            Ok(LikeOutcome::Liked { like_count, .. }) => {
                info!(%artwork_id, %identity, like_count, "artwork liked");
            }
            Ok(LikeOutcome::AlreadyLiked { like_count, .. }) => {
                debug!(%artwork_id, %identity, like_count, "artwork already liked");
            }
            Err(err) => log_failure("like", artwork_id, err),
        }

        outcome
    }

    /// Withdraw `identity`'s like. Without a like this is a no-op.
    pub async fn unlike(
        &self,
        artwork_id: ArtworkId,
        identity: &LikeIdentity,
    ) -> Result<UnlikeOutcome> {
        let outcome = self.store.remove_like(artwork_id, identity).await;

        match &outcome {
            Ok(UnlikeOutcome::Removed { like_count }) => {
                info!(%artwork_id, %identity, like_count, "artwork unliked");
            }
            Ok(UnlikeOutcome::NotLiked { .. }) => {
                debug!(%artwork_id, %identity, "unlike without a like");
            }
            Err(err) => log_failure("unlike", artwork_id, err),
        }

        outcome
    }

    pub async fn has_liked(&self, artwork_id: ArtworkId, identity: &LikeIdentity) -> Result<bool> {
        Ok(self.store.find_like(artwork_id, identity).await?.is_some())
    }

    /// Artworks `user_id` has liked, most recent like first.
    pub async fn liked_artworks(&self, user_id: UserId) -> Result<Vec<LikedArtwork>> {
        let likes = self.store.likes_by_user(user_id).await?;
        if likes.is_empty() {
            return Ok(Vec::new());
        }

        let mut entries: HashMap<ArtworkId, ArtworkEntry> = self
            .store
            .artwork_entries()
            .await?
            .into_iter()
            .map(|entry| (entry.artwork.id, entry))
            .collect();

        let mut liked: Vec<LikedArtwork> = likes
            .into_iter()
            .filter_map(|like| {
                entries.remove(&like.artwork_id).map(|entry| LikedArtwork {
                    entry,
                    liked_at: like.liked_at,
                })
            })
            .collect();

        liked.sort_by(|a, b| {
            b.liked_at
                .cmp(&a.liked_at)
                .then_with(|| a.entry.artwork.id.cmp(&b.entry.artwork.id))
        });
        Ok(liked)
    }

    /// Rebuild the counter of `artwork_id` from its ledger rows.
    pub async fn recount(&self, artwork_id: ArtworkId) -> Result<u32> {
        let count = self.store.recount_likes(artwork_id).await?;
        info!(%artwork_id, count, "like counter rebuilt from ledger");
        Ok(count)
    }
}

fn log_failure(operation: &str, artwork_id: ArtworkId, err: &CatalogueError) {
    if err.is_expected() {
        warn!(%artwork_id, operation, %err, "like request rejected");
    } else {
        error!(%artwork_id, operation, %err, "like request failed");
    }
}
