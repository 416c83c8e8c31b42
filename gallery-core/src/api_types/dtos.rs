use chrono::{DateTime, NaiveDate, Utc};
use gallery_model::{ArtistId, ArtworkId, ExhibitionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::likes::{LikeOutcome, UnlikeOutcome};
use crate::query::{ArtistEntry, ArtworkEntry, ExhibitionEntry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDto {
    pub id: ArtworkId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(rename = "type")]
    pub artwork_type: String,
    pub status: String,
    pub likes: u32,
    pub price: Option<Decimal>,
    pub is_for_sale: bool,
    pub is_new: bool,
    pub created_date: DateTime<Utc>,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub exhibition_id: Option<ExhibitionId>,
}

impl ArtworkDto {
    pub fn from_entry(entry: &ArtworkEntry, now: DateTime<Utc>) -> Self {
        let artwork = &entry.artwork;
        Self {
            id: artwork.id,
            title: artwork.title.clone(),
            description: artwork.description.clone(),
            image_url: artwork.image.clone(),
            artwork_type: artwork.artwork_type.to_string(),
            status: artwork.status.to_string(),
            likes: artwork.like_count,
            price: artwork.price,
            is_for_sale: artwork.for_sale,
            is_new: artwork.is_new(now),
            created_date: artwork.created_at,
            artist_id: artwork.artist_id,
            artist_name: entry.artist_name.clone(),
            exhibition_id: artwork.exhibition_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDto {
    pub id: ArtistId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub profile_image_url: String,
    pub status: String,
    pub joined_date: DateTime<Utc>,
    pub artwork_count: u32,
    pub total_likes: u64,
}

impl From<&ArtistEntry> for ArtistDto {
    fn from(entry: &ArtistEntry) -> Self {
        let artist = &entry.artist;
        Self {
            id: artist.id,
            name: artist.name.clone(),
            email: artist.email.clone(),
            phone: artist.phone.clone(),
            bio: artist.bio.clone(),
            profile_image_url: artist.profile_image.clone(),
            status: artist.status.to_string(),
            joined_date: artist.joined_at,
            artwork_count: entry.artwork_count,
            total_likes: entry.total_likes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionDto {
    pub id: ExhibitionId,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub max_artworks: u32,
    /// Status resolved for the day the listing ran.
    pub status: String,
    pub banner_image_url: String,
    pub artwork_count: u32,
    pub days_remaining: i64,
    pub total_days: i64,
}

impl ExhibitionDto {
    pub fn from_entry(entry: &ExhibitionEntry, today: NaiveDate) -> Self {
        let exhibition = &entry.exhibition;
        Self {
            id: exhibition.id,
            name: exhibition.name.clone(),
            description: exhibition.description.clone(),
            start_date: exhibition.start_date,
            end_date: exhibition.end_date,
            location: exhibition.location.clone(),
            max_artworks: exhibition.max_artworks,
            status: entry.status.to_string(),
            banner_image_url: exhibition.banner_image.clone(),
            artwork_count: entry.artwork_count,
            days_remaining: exhibition.days_remaining(today),
            total_days: exhibition.total_days(),
        }
    }
}

/// Result of a like or unlike call as the API reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStateDto {
    pub artwork_id: ArtworkId,
    pub liked: bool,
    /// True when the call did not change anything.
    pub unchanged: bool,
    pub like_count: u32,
}

impl LikeStateDto {
    pub fn from_like(artwork_id: ArtworkId, outcome: &LikeOutcome) -> Self {
        Self {
            artwork_id,
            liked: true,
            unchanged: !outcome.is_new(),
            like_count: outcome.like_count(),
        }
    }

    pub fn from_unlike(artwork_id: ArtworkId, outcome: &UnlikeOutcome) -> Self {
        Self {
            artwork_id,
            liked: false,
            unchanged: !outcome.was_removed(),
            like_count: outcome.like_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use gallery_model::{Artwork, ArtworkStatus, ArtworkType};

    #[test]
    fn artwork_dto_flags_recent_work() {
        let now = Utc.with_ymd_and_hms(2026, 5, 10, 12, 0, 0).unwrap();
        let entry = ArtworkEntry {
            artwork: Artwork {
                id: ArtworkId(10),
                title: "Frankincense Road".into(),
                description: "Oil on canvas".into(),
                image: "/images/artworks/10.jpg".into(),
                artwork_type: ArtworkType::Painting,
                status: ArtworkStatus::Active,
                like_count: 45,
                price: None,
                for_sale: false,
                created_at: now - Duration::days(3),
                artist_id: ArtistId(1),
                exhibition_id: None,
            },
            artist_name: "Layla Al-Harthy".into(),
        };

        let dto = ArtworkDto::from_entry(&entry, now);
        assert!(dto.is_new);
        assert_eq!(dto.artwork_type, "Painting");

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["type"], "Painting");
        assert_eq!(json["artistName"], "Layla Al-Harthy");
        assert_eq!(json["likes"], 45);
    }

    #[test]
    fn like_state_reports_no_op() {
        let outcome = LikeOutcome::AlreadyLiked {
            like_count: 46,
            liked_at: Utc.with_ymd_and_hms(2026, 5, 10, 12, 0, 0).unwrap(),
        };
        let dto = LikeStateDto::from_like(ArtworkId(10), &outcome);
        assert!(dto.liked);
        assert!(dto.unchanged);
        assert_eq!(dto.like_count, 46);
    }
}
