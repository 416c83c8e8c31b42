//! Sample gallery content for demos and local development. Everything is
//! written through the store interface, so the same data lands in memory or
//! in PostgreSQL.

use chrono::{DateTime, Duration, Utc};
use gallery_model::{
    ArtistId, ArtistStatus, ArtworkId, ArtworkStatus, ArtworkType, ExhibitionStatus,
    LikeIdentity,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::database::ports::{CatalogueStore, NewArtist, NewArtwork, NewExhibition};
use crate::error::{CatalogueError, Result};

/// What [`seed`] inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSummary {
    pub artists: usize,
    pub artworks: usize,
    pub exhibitions: usize,
    pub likes: u64,
}

struct ArtistSeed {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    bio: &'static str,
    image: &'static str,
    joined_months_ago: i64,
}

struct ArtworkSeed {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    artwork_type: ArtworkType,
    /// Index into [`ARTISTS`].
    artist: usize,
    likes: u32,
    created_days_ago: i64,
    price: i64,
}

struct ExhibitionSeed {
    name: &'static str,
    description: &'static str,
    location: &'static str,
    starts_in_days: i64,
    ends_in_days: i64,
    max_artworks: u32,
    banner: &'static str,
    created_days_ago: i64,
}

const ARTISTS: &[ArtistSeed] = &[
    ArtistSeed {
        name: "Mohammed Al Harthi",
        email: "mohammed@example.com",
        phone: "+968 9123 4567",
        bio: "Traditional Omani artist specializing in desert landscapes and cultural heritage",
        image: "/images/MohammedAlHarthi.jpg",
        joined_months_ago: 6,
    },
    ArtistSeed {
        name: "Fatima Al Saidi",
        email: "fatima@example.com",
        phone: "+968 9234 5678",
        bio: "Contemporary photographer capturing modern Omani life and architecture",
        image: "/images/FatimaAlSaidi.jpg",
        joined_months_ago: 3,
    },
    ArtistSeed {
        name: "Ahmed Al Balushi",
        email: "ahmed@example.com",
        phone: "+968 9345 6789",
        bio: "Master craftsman known for traditional Omani silverwork and khanjars",
        image: "/images/AhmedAlBalushi.jpg",
        joined_months_ago: 12,
    },
];

const ARTWORKS: &[ArtworkSeed] = &[
    ArtworkSeed {
        title: "Dunes at Dusk",
        description: "Wind-carved dunes of the Sharqiya sands painted in the last light of evening",
        image: "/images/painting1.jpg",
        artwork_type: ArtworkType::Painting,
        artist: 0,
        likes: 45,
        created_days_ago: 30,
        price: 250,
    },
    ArtworkSeed {
        title: "Ghost Pier",
        description: "A monochrome long-exposure photograph of the skeletal remains of a pier dissolving into a misty sea",
        image: "/images/photograph1.jpg",
        artwork_type: ArtworkType::Photography,
        artist: 1,
        likes: 67,
        created_days_ago: 15,
        price: 180,
    },
    ArtworkSeed {
        title: "Woven Warmth",
        description: "Handcrafted rattan baskets, coasters and homewares bathed in soft light",
        image: "/images/handmadecrafts1.jpg",
        artwork_type: ArtworkType::HandmadeCraft,
        artist: 2,
        likes: 89,
        created_days_ago: 7,
        price: 500,
    },
    ArtworkSeed {
        title: "Echoes of the Rails",
        description: "A black-and-white portrait of an elderly woman holding a photograph of a train",
        image: "/images/photograph2.jpg",
        artwork_type: ArtworkType::Photography,
        artist: 1,
        likes: 52,
        created_days_ago: 20,
        price: 200,
    },
    ArtworkSeed {
        title: "Chromatic Storm",
        description: "An abstract painting where impasto layers of blue, purple, orange and red clash and swirl",
        image: "/images/painting2.jpg",
        artwork_type: ArtworkType::Painting,
        artist: 0,
        likes: 73,
        created_days_ago: 5,
        price: 350,
    },
    ArtworkSeed {
        title: "Whisker Whisper",
        description: "A detailed embroidery of a tabby cat's face held in an embroidery hoop",
        image: "/images/handmadecrafts2.jpg",
        artwork_type: ArtworkType::HandmadeCraft,
        artist: 2,
        likes: 41,
        created_days_ago: 12,
        price: 120,
    },
];

const EXHIBITIONS: &[ExhibitionSeed] = &[
    ExhibitionSeed {
        name: "Contemporary Omani Art",
        description: "A showcase of modern and traditional Omani art featuring local artists and their interpretations of our culture",
        location: "Muscat Art Gallery",
        starts_in_days: -10,
        ends_in_days: 20,
        max_artworks: 50,
        banner: "/images/ContemporaryOmaniArt.jpg",
        created_days_ago: 20,
    },
    ExhibitionSeed {
        name: "Photography Week",
        description: "Annual photography exhibition celebrating Omani landscapes and the beauty of everyday life",
        location: "Royal Opera House",
        starts_in_days: 15,
        ends_in_days: 22,
        max_artworks: 75,
        banner: "/images/PhotographyWeek.jpg",
        created_days_ago: 5,
    },
    ExhibitionSeed {
        name: "Heritage Crafts Fair",
        description: "Traditional Omani craftsmanship including silverwork, pottery and textiles",
        location: "Nizwa Fort",
        starts_in_days: 30,
        ends_in_days: 45,
        max_artworks: 60,
        banner: "/images/HeritageCraftsFair.jpg",
        created_days_ago: 3,
    },
];

/// Anonymous visitor `n` of a seeded like set, drawn from the documentation
/// address range.
fn visitor(n: u32) -> LikeIdentity {
    LikeIdentity::Anonymous(format!("198.51.{}.{}", 100 + n / 250, 1 + n % 250))
}

/// Fill an empty store with the sample gallery. Like counters are backed by
/// real like rows from distinct anonymous visitors.
pub async fn seed(store: &dyn CatalogueStore, now: DateTime<Utc>) -> Result<DemoSummary> {
    if !store.artist_entries().await?.is_empty() {
        return Err(CatalogueError::Conflict(
            "the catalogue already has artists; demo data goes into an empty store".to_string(),
        ));
    }

    let today = now.date_naive();
    let mut summary = DemoSummary::default();

    let mut artist_ids: Vec<ArtistId> = Vec::with_capacity(ARTISTS.len());
    for seed in ARTISTS {
        let artist = store
            .insert_artist(NewArtist {
                name: seed.name.to_string(),
                email: seed.email.to_string(),
                phone: seed.phone.to_string(),
                bio: seed.bio.to_string(),
                profile_image: seed.image.to_string(),
                status: ArtistStatus::Active,
                joined_at: now - Duration::days(30 * seed.joined_months_ago),
            })
            .await?;
        artist_ids.push(artist.id);
        summary.artists += 1;
    }

    for seed in EXHIBITIONS {
        let start_date = today + Duration::days(seed.starts_in_days);
        let status = if seed.starts_in_days > 0 {
            ExhibitionStatus::Upcoming
        } else {
            ExhibitionStatus::Active
        };
        store
            .insert_exhibition(NewExhibition {
                name: seed.name.to_string(),
                description: seed.description.to_string(),
                start_date,
                end_date: today + Duration::days(seed.ends_in_days),
                location: seed.location.to_string(),
                max_artworks: seed.max_artworks,
                status,
                banner_image: seed.banner.to_string(),
                created_at: now - Duration::days(seed.created_days_ago),
            })
            .await?;
        summary.exhibitions += 1;
    }

    for seed in ARTWORKS {
        let artwork = store
            .insert_artwork(NewArtwork {
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                image: seed.image.to_string(),
                artwork_type: seed.artwork_type,
                status: ArtworkStatus::Active,
                price: Some(Decimal::new(seed.price, 0)),
                for_sale: true,
                created_at: now - Duration::days(seed.created_days_ago),
                artist_id: artist_ids[seed.artist],
                exhibition_id: None,
            })
            .await?;
        summary.artworks += 1;
        summary.likes += u64::from(seed_likes(store, artwork.id, seed.likes, now).await?);
    }

    info!(
        artists = summary.artists,
        artworks = summary.artworks,
        exhibitions = summary.exhibitions,
        likes = summary.likes,
        "demo catalogue seeded"
    );
    Ok(summary)
}

async fn seed_likes(
    store: &dyn CatalogueStore,
    artwork_id: ArtworkId,
    count: u32,
    now: DateTime<Utc>,
) -> Result<u32> {
    let mut recorded = 0;
    for n in 0..count {
        let liked_at = now - Duration::minutes(i64::from(count - n));
        if store
            .record_like(artwork_id, &visitor(n), liked_at)
            .await?
            .is_new()
        {
            recorded += 1;
        }
    }
    Ok(recorded)
}
