//! Like ledger: at most one like per identity per artwork, with the artwork
//! counter kept in step.
//!
//! Identities prefer the authenticated user id and fall back to the network
//! address for anonymous visitors. Anonymous visitors sharing an address are
//! indistinguishable and count once; this is accepted behaviour.

mod ledger;

pub use ledger::{LikedArtwork, LikeLedger};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a like attempt. Both variants carry the counter after the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "outcome")]
pub enum LikeOutcome {
    Liked {
        like_count: u32,
        liked_at: DateTime<Utc>,
    },
    /// The identity had already liked the artwork; nothing changed.
    AlreadyLiked {
        like_count: u32,
        liked_at: DateTime<Utc>,
    },
}

impl LikeOutcome {
    pub fn like_count(&self) -> u32 {
        match self {
            LikeOutcome::Liked { like_count, .. } | LikeOutcome::AlreadyLiked { like_count, .. } => {
                *like_count
            }
        }
    }

    /// When the identity's like was recorded.
    pub fn liked_at(&self) -> DateTime<Utc> {
        match self {
            LikeOutcome::Liked { liked_at, .. } | LikeOutcome::AlreadyLiked { liked_at, .. } => {
                *liked_at
            }
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, LikeOutcome::Liked { .. })
    }
}

/// Result of an unlike attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "outcome")]
pub enum UnlikeOutcome {
    Removed { like_count: u32 },
    /// No like existed for the identity; nothing changed.
    NotLiked { like_count: u32 },
}

impl UnlikeOutcome {
    pub fn like_count(&self) -> u32 {
        match self {
            UnlikeOutcome::Removed { like_count } | UnlikeOutcome::NotLiked { like_count } => {
                *like_count
            }
        }
    }

    pub fn was_removed(&self) -> bool {
        matches!(self, UnlikeOutcome::Removed { .. })
    }
}
