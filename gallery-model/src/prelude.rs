//! Flat snapshot of the model surface for downstream crates.

pub use super::artist::{Artist, ArtistStatus, DEFAULT_PROFILE_IMAGE};
pub use super::artwork::{
    Artwork, ArtworkStatus, ArtworkType, DEFAULT_ARTWORK_IMAGE, NEW_ARTWORK_WINDOW_DAYS,
};
pub use super::error::ModelError;
pub use super::exhibition::{
    DEFAULT_BANNER_IMAGE, DEFAULT_MAX_ARTWORKS, Exhibition, ExhibitionStatus,
};
pub use super::ids::{ArtistId, ArtworkId, ExhibitionId, LikeId, UserId};
pub use super::like::{Like, LikeIdentity, MAX_NETWORK_ADDRESS_LEN};
pub use super::user::{User, UserRole};
