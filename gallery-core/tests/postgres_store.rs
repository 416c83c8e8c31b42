//! Runs against a live PostgreSQL when `TEST_DATABASE_URL` is set; passes
//! trivially otherwise.
#![cfg(feature = "database")]

use std::sync::Arc;

use chrono::{Duration, Utc};
use gallery_core::database::ports::{ArtistRepository, ArtworkRepository, NewArtist, NewArtwork};
use gallery_core::{CatalogueStore, ErrorKind, LikeLedger, LikeOutcome, PostgresCatalogueStore};
use gallery_model::like::MAX_NETWORK_ADDRESS_LEN;
use gallery_model::{ArtistStatus, ArtworkStatus, ArtworkType, LikeIdentity};

async fn store() -> Option<PostgresCatalogueStore> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping PostgreSQL store test");
        return None;
    };
    let store = PostgresCatalogueStore::connect(&url, 4).await.unwrap();
    store.migrate().await.unwrap();
    Some(store)
}

fn unique(prefix: &str) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{prefix}-{nanos}")
}

#[tokio::test]
async fn like_ledger_round_trip_on_postgres() {
    let Some(store) = store().await else {
        return;
    };
    let now = Utc::now();

    let artist = store
        .insert_artist(NewArtist {
            name: "Postgres Painter".into(),
            email: format!("{}@gallery.test", unique("painter")),
            phone: String::new(),
            bio: String::new(),
            profile_image: "/images/artists/default.svg".into(),
            status: ArtistStatus::Active,
            joined_at: now,
        })
        .await
        .unwrap();

    let artwork = store
        .insert_artwork(NewArtwork {
            title: "Tide".into(),
            description: "Acrylic on board".into(),
            image: "/images/artworks/default.svg".into(),
            artwork_type: ArtworkType::Painting,
            status: ArtworkStatus::Active,
            price: None,
            for_sale: false,
            created_at: now - Duration::days(1),
            artist_id: artist.id,
            exhibition_id: None,
        })
        .await
        .unwrap();

    let store: Arc<dyn CatalogueStore> = Arc::new(store);
    let ledger = LikeLedger::new(store.clone(), Arc::new(gallery_core::SystemClock));
    let visitor = LikeIdentity::Anonymous(unique("203.0.113.7"));

    let first = ledger.try_like(artwork.id, &visitor).await.unwrap();
    assert!(first.is_new());
    assert_eq!(first.like_count(), 1);

    let second = ledger.try_like(artwork.id, &visitor).await.unwrap();
    assert!(matches!(second, LikeOutcome::AlreadyLiked { like_count: 1, .. }));
    assert_eq!(ledger.recount(artwork.id).await.unwrap(), 1);

    let too_wide = LikeIdentity::Anonymous("9".repeat(MAX_NETWORK_ADDRESS_LEN + 1));
    let err = store
        .record_like(artwork.id, &too_wide, now)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);

    let entry = store.artwork_entry(artwork.id).await.unwrap().unwrap();
    assert_eq!(entry.artist_name, "Postgres Painter");

    let duplicate = store
        .insert_artist(NewArtist {
            name: "Copy".into(),
            email: artist.email.to_uppercase(),
            phone: String::new(),
            bio: String::new(),
            profile_image: String::new(),
            status: ArtistStatus::Active,
            joined_at: now,
        })
        .await
        .unwrap_err();
    assert_eq!(duplicate.kind(), ErrorKind::Conflict);

    store.delete_artist(artist.id).await.unwrap();
    assert!(store.get_artwork(artwork.id).await.unwrap().is_none());
    assert!(store.find_like(artwork.id, &visitor).await.unwrap().is_none());
}
