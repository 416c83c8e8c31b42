pub mod artists;
pub mod artworks;
pub mod exhibitions;
pub mod likes;
pub mod users;

pub use artists::{ArtistRepository, NewArtist};
pub use artworks::{ArtworkRepository, NewArtwork};
pub use exhibitions::{ExhibitionRepository, NewExhibition};
pub use likes::LikeRepository;
pub use users::{NewUser, UserRepository};

/// The full entity store consumed by the catalogue services.
pub trait CatalogueStore:
    ArtistRepository
    + ArtworkRepository
    + ExhibitionRepository
    + LikeRepository
    + UserRepository
    + std::fmt::Debug
{
}

impl<T> CatalogueStore for T where
    T: ArtistRepository
        + ArtworkRepository
        + ExhibitionRepository
        + LikeRepository
        + UserRepository
        + std::fmt::Debug
{
}
