// Database row types for the catalogue tables

use chrono::{DateTime, NaiveDate, Utc};
use gallery_model::{
    Artist, ArtistId, ArtistStatus, Artwork, ArtworkId, ArtworkStatus, ArtworkType, Exhibition,
    ExhibitionId, ExhibitionStatus, Like, LikeId, User, UserId, UserRole,
};
use rust_decimal::Decimal;

use super::{corrupt, counter};
use crate::error::CatalogueError;
use crate::query::{ArtistEntry, ArtworkEntry};

#[derive(sqlx::FromRow)]
pub(super) struct ArtistRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    bio: String,
    profile_image: String,
    status: i16,
    joined_at: DateTime<Utc>,
}

impl TryFrom<ArtistRow> for Artist {
    type Error = CatalogueError;

    fn try_from(row: ArtistRow) -> Result<Self, Self::Error> {
        Ok(Artist {
            id: ArtistId(row.id),
            name: row.name,
            email: row.email,
            phone: row.phone,
            bio: row.bio,
            profile_image: row.profile_image,
            status: ArtistStatus::try_from(row.status).map_err(corrupt)?,
            joined_at: row.joined_at,
        })
    }
}

#[derive(sqlx::FromRow)]
pub(super) struct ArtistEntryRow {
    #[sqlx(flatten)]
    artist: ArtistRow,
    artwork_count: i64,
    total_likes: i64,
}

impl TryFrom<ArtistEntryRow> for ArtistEntry {
    type Error = CatalogueError;

    fn try_from(row: ArtistEntryRow) -> Result<Self, Self::Error> {
        Ok(ArtistEntry {
            artist: row.artist.try_into()?,
            artwork_count: counter(row.artwork_count),
            total_likes: u64::try_from(row.total_likes).unwrap_or(0),
        })
    }
}

#[derive(sqlx::FromRow)]
pub(super) struct ArtworkRow {
    id: i64,
    title: String,
    description: String,
    image: String,
    artwork_type: i16,
    status: i16,
    like_count: i32,
    price: Option<Decimal>,
    for_sale: bool,
    created_at: DateTime<Utc>,
    artist_id: i64,
    exhibition_id: Option<i64>,
}

impl TryFrom<ArtworkRow> for Artwork {
    type Error = CatalogueError;

    fn try_from(row: ArtworkRow) -> Result<Self, Self::Error> {
        Ok(Artwork {
            id: ArtworkId(row.id),
            title: row.title,
            description: row.description,
            image: row.image,
            artwork_type: ArtworkType::try_from(row.artwork_type).map_err(corrupt)?,
            status: ArtworkStatus::try_from(row.status).map_err(corrupt)?,
            like_count: counter(row.like_count),
            price: row.price,
            for_sale: row.for_sale,
            created_at: row.created_at,
            artist_id: ArtistId(row.artist_id),
            exhibition_id: row.exhibition_id.map(ExhibitionId),
        })
    }
}

#[derive(sqlx::FromRow)]
pub(super) struct ArtworkEntryRow {
    #[sqlx(flatten)]
    artwork: ArtworkRow,
    artist_name: String,
}

impl TryFrom<ArtworkEntryRow> for ArtworkEntry {
    type Error = CatalogueError;

    fn try_from(row: ArtworkEntryRow) -> Result<Self, Self::Error> {
        Ok(ArtworkEntry {
            artwork: row.artwork.try_into()?,
            artist_name: row.artist_name,
        })
    }
}

#[derive(sqlx::FromRow)]
pub(super) struct ExhibitionRow {
    id: i64,
    name: String,
    description: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    location: String,
    max_artworks: i32,
    status: i16,
    banner_image: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ExhibitionRow> for Exhibition {
    type Error = CatalogueError;

    fn try_from(row: ExhibitionRow) -> Result<Self, Self::Error> {
        Ok(Exhibition {
            id: ExhibitionId(row.id),
            name: row.name,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            location: row.location,
            max_artworks: counter(row.max_artworks),
            status: ExhibitionStatus::try_from(row.status).map_err(corrupt)?,
            banner_image: row.banner_image,
            created_at: row.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
pub(super) struct ExhibitionCountRow {
    #[sqlx(flatten)]
    exhibition: ExhibitionRow,
    artwork_count: i64,
}

impl TryFrom<ExhibitionCountRow> for (Exhibition, u32) {
    type Error = CatalogueError;

    fn try_from(row: ExhibitionCountRow) -> Result<Self, Self::Error> {
        Ok((row.exhibition.try_into()?, counter(row.artwork_count)))
    }
}

#[derive(sqlx::FromRow)]
pub(super) struct LikeRow {
    id: i64,
    artwork_id: i64,
    user_id: Option<i64>,
    network_address: Option<String>,
    liked_at: DateTime<Utc>,
}

impl From<LikeRow> for Like {
    fn from(row: LikeRow) -> Self {
        Like {
            id: LikeId(row.id),
            artwork_id: ArtworkId(row.artwork_id),
            user_id: row.user_id.map(UserId),
            network_address: row.network_address,
            liked_at: row.liked_at,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(super) struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    email: String,
    full_name: String,
    role: i16,
    is_active: bool,
    created_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRow> for User {
    type Error = CatalogueError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(row.id),
            username: row.username,
            password_hash: row.password_hash,
            email: row.email,
            full_name: row.full_name,
            role: UserRole::try_from(row.role).map_err(corrupt)?,
            is_active: row.is_active,
            created_at: row.created_at,
            last_login_at: row.last_login_at,
        })
    }
}

/// Convert a batch of rows, failing on the first corrupt one.
pub(super) fn convert_all<R, T>(rows: Vec<R>) -> Result<Vec<T>, CatalogueError>
where
    T: TryFrom<R, Error = CatalogueError>,
{
    rows.into_iter().map(T::try_from).collect()
}
