//! Shared fixture for gallery-core integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use gallery_core::database::ports::{NewArtist, NewArtwork, NewExhibition};
use gallery_core::{
    Catalogue, CatalogueSettings, CatalogueStore, FixedClock, InMemoryCatalogueStore, LikeLedger,
};
use gallery_model::{
    ArtistId, ArtistStatus, ArtworkId, ArtworkStatus, ArtworkType, ExhibitionId,
    ExhibitionStatus, LikeIdentity,
};
use rust_decimal::Decimal;

/// The instant every fixture clock is pinned to.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 10, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

/// Anonymous visitor `n`, from the TEST-NET-1 range.
pub fn visitor(n: u32) -> LikeIdentity {
    LikeIdentity::Anonymous(format!("192.0.2.{}", n + 1))
}

#[derive(Debug, Clone)]
pub struct ArtworkSpec {
    pub title: String,
    pub description: String,
    pub artwork_type: ArtworkType,
    pub status: ArtworkStatus,
    pub price: Option<Decimal>,
    pub for_sale: bool,
    pub created_days_ago: i64,
    pub likes: u32,
    pub exhibition_id: Option<ExhibitionId>,
}

impl ArtworkSpec {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: format!("{title}, a study"),
            artwork_type: ArtworkType::Painting,
            status: ArtworkStatus::Active,
            price: None,
            for_sale: false,
            created_days_ago: 1,
            likes: 0,
            exhibition_id: None,
        }
    }

    pub fn created_days_ago(mut self, days: i64) -> Self {
        self.created_days_ago = days;
        self
    }

    pub fn likes(mut self, likes: u32) -> Self {
        self.likes = likes;
        self
    }

    pub fn of_type(mut self, artwork_type: ArtworkType) -> Self {
        self.artwork_type = artwork_type;
        self
    }

    pub fn status(mut self, status: ArtworkStatus) -> Self {
        self.status = status;
        self
    }

    pub fn priced(mut self, price: i64) -> Self {
        self.price = Some(Decimal::new(price, 0));
        self.for_sale = true;
        self
    }

    pub fn in_exhibition(mut self, exhibition_id: ExhibitionId) -> Self {
        self.exhibition_id = Some(exhibition_id);
        self
    }
}

pub struct Fixture {
    pub store: Arc<dyn CatalogueStore>,
    pub clock: Arc<FixedClock>,
    pub catalogue: Catalogue,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_settings(CatalogueSettings::default())
    }

    pub fn with_settings(settings: CatalogueSettings) -> Self {
        let store: Arc<dyn CatalogueStore> = Arc::new(InMemoryCatalogueStore::new());
        let clock = Arc::new(FixedClock(now()));
        let catalogue = Catalogue::new(store.clone(), clock.clone(), settings);
        Self {
            store,
            clock,
            catalogue,
        }
    }

    pub fn ledger(&self) -> LikeLedger {
        self.catalogue.like_ledger()
    }

    pub async fn artist(&self, name: &str) -> ArtistId {
        self.artist_with_status(name, ArtistStatus::Active).await
    }

    pub async fn artist_with_status(&self, name: &str, status: ArtistStatus) -> ArtistId {
        let slug: String = name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase();
        self.store
            .insert_artist(NewArtist {
                name: name.to_string(),
                email: format!("{slug}@gallery.test"),
                phone: String::new(),
                bio: format!("{name} works from a studio in Muscat"),
                profile_image: String::new(),
                status,
                joined_at: days_ago(100),
            })
            .await
            .unwrap()
            .id
    }

    pub async fn exhibition(&self, name: &str, starts_in: i64, ends_in: i64) -> ExhibitionId {
        let today = now().date_naive();
        self.store
            .insert_exhibition(NewExhibition {
                name: name.to_string(),
                description: format!("{name}, a group show"),
                start_date: today + Duration::days(starts_in),
                end_date: today + Duration::days(ends_in),
                location: "Muscat".to_string(),
                max_artworks: 50,
                status: ExhibitionStatus::Upcoming,
                banner_image: String::new(),
                created_at: days_ago(40),
            })
            .await
            .unwrap()
            .id
    }

    /// Inserts an artwork and records `spec.likes` likes from distinct
    /// anonymous visitors. The status is applied after the likes.
    pub async fn artwork(&self, artist_id: ArtistId, spec: ArtworkSpec) -> ArtworkId {
        let artwork = self
            .store
            .insert_artwork(NewArtwork {
                title: spec.title.clone(),
                description: spec.description.clone(),
                image: String::new(),
                artwork_type: spec.artwork_type,
                status: ArtworkStatus::Active,
                price: spec.price,
                for_sale: spec.for_sale,
                created_at: days_ago(spec.created_days_ago),
                artist_id,
                exhibition_id: spec.exhibition_id,
            })
            .await
            .unwrap();

        for n in 0..spec.likes {
            self.store
                .record_like(artwork.id, &visitor(n), now())
                .await
                .unwrap();
        }

        if spec.status != ArtworkStatus::Active {
            let mut stored = self.store.get_artwork(artwork.id).await.unwrap().unwrap();
            stored.status = spec.status;
            self.store.update_artwork(&stored).await.unwrap();
        }

        artwork.id
    }

    pub async fn like_count(&self, id: ArtworkId) -> u32 {
        self.store
            .get_artwork(id)
            .await
            .unwrap()
            .unwrap()
            .like_count
    }
}
