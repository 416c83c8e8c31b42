use chrono::{DateTime, Utc};
use std::fmt;

use crate::ids::{ArtworkId, LikeId, UserId};

/// Longest network address, in characters, a like row can hold.
pub const MAX_NETWORK_ADDRESS_LEN: usize = 64;

/// Key used to deduplicate likes on an artwork.
///
/// Authenticated visitors are keyed by user id. Anonymous visitors fall back
/// to their network address, so two anonymous visitors behind the same
/// address count as one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "kind", content = "value"))]
pub enum LikeIdentity {
    User(UserId),
    Anonymous(String),
}

impl LikeIdentity {
    /// Prefers the authenticated user; otherwise uses a non-blank network
    /// address. Returns `None` when neither is available.
    pub fn resolve(user_id: Option<UserId>, network_address: Option<&str>) -> Option<Self> {
        if let Some(user_id) = user_id {
            return Some(LikeIdentity::User(user_id));
        }
        network_address
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(|address| LikeIdentity::Anonymous(address.to_string()))
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            LikeIdentity::User(id) => Some(*id),
            LikeIdentity::Anonymous(_) => None,
        }
    }

    pub fn network_address(&self) -> Option<&str> {
        match self {
            LikeIdentity::User(_) => None,
            LikeIdentity::Anonymous(address) => Some(address.as_str()),
        }
    }

    /// Whether `like` was left by this identity. Anonymous identities only
    /// match anonymous rows, never a row owned by a user.
    pub fn owns(&self, like: &Like) -> bool {
        match self {
            LikeIdentity::User(id) => like.user_id == Some(*id),
            LikeIdentity::Anonymous(address) => {
                like.user_id.is_none() && like.network_address.as_deref() == Some(address.as_str())
            }
        }
    }
}

impl fmt::Display for LikeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LikeIdentity::User(id) => write!(f, "user:{id}"),
            LikeIdentity::Anonymous(address) => write!(f, "anon:{address}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Like {
    pub id: LikeId,
    pub artwork_id: ArtworkId,
    pub user_id: Option<UserId>,
    pub network_address: Option<String>,
    pub liked_at: DateTime<Utc>,
}

impl Like {
    /// Identity this row is deduplicated under.
    pub fn identity(&self) -> Option<LikeIdentity> {
        LikeIdentity::resolve(self.user_id, self.network_address.as_deref())
    }
}
