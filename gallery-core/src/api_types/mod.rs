//! DTOs and envelopes for the JSON surface.

pub mod dtos;
pub mod params;
pub mod responses;

pub use dtos::{ArtistDto, ArtworkDto, ExhibitionDto, LikeStateDto};
pub use params::{ArtistListParams, ArtworkListParams, ExhibitionListParams, ParseMode};
pub use responses::ApiResponse;
