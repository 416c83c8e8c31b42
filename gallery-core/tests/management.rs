mod support;

use std::sync::Arc;

use chrono::Duration;
use gallery_core::management::{
    ArtistForm, ArtworkForm, ExhibitionForm, Management, PasswordCrypto, Registration,
};
use gallery_core::{CatalogueError, ErrorKind};
use gallery_model::{ArtistId, ArtistStatus, ArtworkStatus, ArtworkType, ExhibitionStatus};
use rust_decimal::Decimal;
use support::{ArtworkSpec, Fixture, now};

fn management(fixture: &Fixture) -> Management {
    let crypto = PasswordCrypto::insecure_fast("test-pepper").unwrap();
    Management::new(fixture.store.clone(), fixture.clock.clone(), Arc::new(crypto))
}

fn artist_form(name: &str, email: &str) -> ArtistForm {
    ArtistForm {
        name: name.to_string(),
        email: email.to_string(),
        phone: "+968 9123 4567".to_string(),
        bio: "Desert landscapes".to_string(),
        ..ArtistForm::default()
    }
}

fn artwork_form(title: &str, artist_id: ArtistId) -> ArtworkForm {
    ArtworkForm {
        title: title.to_string(),
        description: "Oil on canvas, 60 by 90".to_string(),
        image: None,
        artwork_type: ArtworkType::Painting,
        price: None,
        for_sale: false,
        artist_id,
        exhibition_id: None,
    }
}

fn exhibition_form(name: &str, starts_in: i64, ends_in: i64) -> ExhibitionForm {
    let today = now().date_naive();
    ExhibitionForm {
        name: name.to_string(),
        description: "A group show of local artists".to_string(),
        start_date: today + Duration::days(starts_in),
        end_date: today + Duration::days(ends_in),
        location: "Muscat".to_string(),
        max_artworks: 50,
        banner_image: None,
    }
}

fn messages(err: CatalogueError) -> Vec<String> {
    assert_eq!(err.kind(), ErrorKind::Input, "unexpected error {err}");
    err.client_messages()
}

#[tokio::test]
async fn new_artists_get_defaults() {
    let fixture = Fixture::new();
    let admin = management(&fixture);

    let artist = admin
        .artists
        .create(artist_form("Mohammed Al Harthi", "mohammed@example.com"))
        .await
        .unwrap();

    assert_eq!(artist.status, ArtistStatus::Active);
    assert_eq!(artist.joined_at, now());
    assert_eq!(artist.profile_image, "/images/artists/default.svg");
}

#[tokio::test]
async fn artist_validation_collects_every_message() {
    let fixture = Fixture::new();
    let admin = management(&fixture);

    let err = admin
        .artists
        .create(ArtistForm {
            name: "M".into(),
            email: "not-an-email".into(),
            phone: "12345".into(),
            bio: "x".repeat(501),
            ..ArtistForm::default()
        })
        .await
        .unwrap_err();

    assert_eq!(messages(err).len(), 4);
}

#[tokio::test]
async fn duplicate_artist_email_conflicts_ignoring_case() {
    let fixture = Fixture::new();
    let admin = management(&fixture);
    let first = admin
        .artists
        .create(artist_form("Fatima Al Saidi", "fatima@example.com"))
        .await
        .unwrap();

    let err = admin
        .artists
        .create(artist_form("Another Fatima", "FATIMA@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    // Keeping one's own email on update is fine.
    let updated = admin
        .artists
        .update(first.id, artist_form("Fatima A. Al Saidi", "fatima@example.com"))
        .await
        .unwrap();
    assert_eq!(updated.name, "Fatima A. Al Saidi");
}

#[tokio::test]
async fn artwork_price_sticks_only_when_for_sale() {
    let fixture = Fixture::new();
    let admin = management(&fixture);
    let artist = fixture.artist("Ahmed Al Balushi").await;

    let not_for_sale = admin
        .artworks
        .create(ArtworkForm {
            price: Some(Decimal::new(250, 0)),
            ..artwork_form("Silver khanjar", artist)
        })
        .await
        .unwrap();
    assert_eq!(not_for_sale.price, None);

    let zero = admin
        .artworks
        .create(ArtworkForm {
            price: Some(Decimal::ZERO),
            for_sale: true,
            ..artwork_form("Clay pot", artist)
        })
        .await
        .unwrap();
    assert_eq!(zero.price, None);

    let priced = admin
        .artworks
        .create(ArtworkForm {
            price: Some(Decimal::new(120, 0)),
            for_sale: true,
            ..artwork_form("Woven basket", artist)
        })
        .await
        .unwrap();
    assert_eq!(priced.price, Some(Decimal::new(120, 0)));
    assert_eq!(priced.status, ArtworkStatus::Active);
    assert_eq!(priced.like_count, 0);
    assert_eq!(priced.image, "/images/artworks/default.svg");

    let sold = admin.artworks.mark_sold(priced.id).await.unwrap();
    assert_eq!(sold.status, ArtworkStatus::Sold);
    assert!(!sold.for_sale);
}

#[tokio::test]
async fn artwork_needs_an_existing_artist() {
    let fixture = Fixture::new();
    let admin = management(&fixture);

    let err = admin
        .artworks
        .create(artwork_form("Orphan", ArtistId(77)))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn artwork_validation_rejects_bad_fields() {
    let fixture = Fixture::new();
    let admin = management(&fixture);
    let artist = fixture.artist("Layla Al Hinai").await;

    let err = admin
        .artworks
        .create(ArtworkForm {
            title: "Ab".into(),
            description: "short".into(),
            price: Some(Decimal::new(-5, 0)),
            ..artwork_form("", artist)
        })
        .await
        .unwrap_err();
    assert_eq!(messages(err).len(), 3);
}

#[tokio::test]
async fn full_exhibitions_turn_artworks_away() {
    let fixture = Fixture::new();
    let admin = management(&fixture);
    let artist = fixture.artist("Noor Al Amri").await;
    let exhibition = admin
        .exhibitions
        .create(ExhibitionForm {
            max_artworks: 1,
            ..exhibition_form("Small Room", 0, 10)
        })
        .await
        .unwrap();

    admin
        .artworks
        .create(ArtworkForm {
            exhibition_id: Some(exhibition.id),
            ..artwork_form("First in", artist)
        })
        .await
        .unwrap();

    let err = admin
        .artworks
        .create(ArtworkForm {
            exhibition_id: Some(exhibition.id),
            ..artwork_form("Second in", artist)
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn exhibitions_cannot_open_in_the_past() {
    let fixture = Fixture::new();
    let admin = management(&fixture);

    let err = admin
        .exhibitions
        .create(exhibition_form("Yesterday", -1, 5))
        .await
        .unwrap_err();
    assert_eq!(messages(err), vec!["Start date cannot be in the past"]);

    let err = admin
        .exhibitions
        .create(exhibition_form("Backwards", 5, 5))
        .await
        .unwrap_err();
    assert_eq!(messages(err), vec!["End date must be after start date"]);

    let today = admin
        .exhibitions
        .create(exhibition_form("Opening today", 0, 5))
        .await
        .unwrap();
    assert_eq!(today.status, ExhibitionStatus::Active);
    assert_eq!(today.banner_image, "/images/exhibitions/default.svg");
}

#[tokio::test]
async fn cancelled_exhibitions_stay_cancelled() {
    let fixture = Fixture::new();
    let admin = management(&fixture);
    let exhibition = admin
        .exhibitions
        .create(exhibition_form("Photography Week", 15, 22))
        .await
        .unwrap();
    assert_eq!(exhibition.status, ExhibitionStatus::Upcoming);

    admin.exhibitions.cancel(exhibition.id).await.unwrap();
    let updated = admin
        .exhibitions
        .update(exhibition.id, exhibition_form("Photography Week II", 15, 30))
        .await
        .unwrap();
    assert_eq!(updated.status, ExhibitionStatus::Cancelled);
}

#[tokio::test]
async fn deleting_an_exhibition_detaches_its_artworks() {
    let fixture = Fixture::new();
    let admin = management(&fixture);
    let artist = fixture.artist("Salim Al Rawahi").await;
    let exhibition = fixture.exhibition("Heritage Crafts Fair", 30, 45).await;
    let artwork = fixture
        .artwork(artist, ArtworkSpec::new("Pottery").in_exhibition(exhibition))
        .await;

    admin.exhibitions.delete(exhibition).await.unwrap();

    let kept = admin.artworks.get(artwork).await.unwrap();
    assert_eq!(kept.exhibition_id, None);
}

#[tokio::test]
async fn deleting_an_artist_cascades() {
    let fixture = Fixture::new();
    let admin = management(&fixture);
    let artist = fixture.artist("Maryam Al Zadjali").await;
    let artwork = fixture
        .artwork(artist, ArtworkSpec::new("Frankincense").likes(2))
        .await;

    admin.artists.delete(artist).await.unwrap();

    assert_eq!(
        admin.artworks.get(artwork).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert!(
        fixture
            .store
            .find_like(artwork, &support::visitor(0))
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn registration_and_sign_in() {
    let fixture = Fixture::new();
    let admin = management(&fixture);

    let user = admin
        .users
        .register(Registration::new(
            "salma",
            "salma@example.com",
            "Salma Al Habsi",
            "correct horse",
        ))
        .await
        .unwrap();
    assert_ne!(user.password_hash, "correct horse");
    assert!(user.last_login_at.is_none());

    let signed_in = admin
        .users
        .authenticate("SALMA", "correct horse")
        .await
        .unwrap();
    assert_eq!(signed_in.id, user.id);
    assert_eq!(signed_in.last_login_at, Some(now()));

    let wrong = admin
        .users
        .authenticate("salma", "battery staple")
        .await
        .unwrap_err();
    let unknown = admin
        .users
        .authenticate("nobody", "battery staple")
        .await
        .unwrap_err();
    assert_eq!(wrong.to_string(), unknown.to_string());

    admin.users.set_active(user.id, false).await.unwrap();
    let disabled = admin
        .users
        .authenticate("salma", "correct horse")
        .await
        .unwrap_err();
    assert_eq!(disabled.kind(), ErrorKind::Input);
}

#[tokio::test]
async fn registration_rules_and_duplicates() {
    let fixture = Fixture::new();
    let admin = management(&fixture);

    let mut mismatched = Registration::new("khalid", "khalid@example.com", "Khalid", "short");
    mismatched.confirm_password = "different".to_string();
    let err = admin.users.register(mismatched).await.unwrap_err();
    assert_eq!(messages(err).len(), 2);

    admin
        .users
        .register(Registration::new(
            "khalid",
            "khalid@example.com",
            "Khalid",
            "long enough",
        ))
        .await
        .unwrap();

    let taken = admin
        .users
        .register(Registration::new(
            "Khalid",
            "other@example.com",
            "Khalid Two",
            "long enough",
        ))
        .await
        .unwrap_err();
    assert_eq!(taken.kind(), ErrorKind::Conflict);

    let email_taken = admin
        .users
        .register(Registration::new(
            "khalid2",
            "KHALID@example.com",
            "Khalid Two",
            "long enough",
        ))
        .await
        .unwrap_err();
    assert_eq!(email_taken.kind(), ErrorKind::Conflict);
}
