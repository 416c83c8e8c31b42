//! Core data model definitions shared across gallery crates.
//!
//! Records mirror the relational layout: artists own artworks, artworks may be
//! hung in an exhibition, and likes point at an artwork and optionally at the
//! user who left them.

pub use ::chrono;
pub use ::rust_decimal;

#[macro_use]
mod macros;

pub mod artist;
pub mod artwork;
pub mod error;
pub mod exhibition;
pub mod ids;
pub mod like;
pub mod prelude;
pub mod user;

pub use artist::{Artist, ArtistStatus};
pub use artwork::{Artwork, ArtworkStatus, ArtworkType};
pub use error::{ModelError, Result as ModelResult};
pub use exhibition::{Exhibition, ExhibitionStatus};
pub use ids::{ArtistId, ArtworkId, ExhibitionId, LikeId, UserId};
pub use like::{Like, LikeIdentity};
pub use user::{User, UserRole};
