mod support;

use std::cmp::Ordering;

use gallery_core::database::ports::NewArtist;
use gallery_core::query::{
    ArtistQueryBuilder, ArtistSort, ArtworkEntry, ArtworkQuery, ArtworkQueryBuilder, ArtworkSort,
    EntryOrder, ExhibitionQueryBuilder, ExhibitionSort, PageRequest, SortableEntry,
};
use gallery_model::{ArtistStatus, ArtworkId, ArtworkStatus, ArtworkType, ExhibitionStatus};
use support::{ArtworkSpec, Fixture, days_ago};

fn ids(entries: &[ArtworkEntry]) -> Vec<ArtworkId> {
    entries.iter().map(|entry| entry.artwork.id).collect()
}

/// Three artworks created 30, 15 and 7 days ago with 45, 67 and 89 likes.
async fn scenario() -> (Fixture, [ArtworkId; 3]) {
    let fixture = Fixture::new();
    let artist = fixture.artist("Mohammed Al Harthi").await;
    let a = fixture
        .artwork(artist, ArtworkSpec::new("Dunes").created_days_ago(30).likes(45))
        .await;
    let b = fixture
        .artwork(artist, ArtworkSpec::new("Pier").created_days_ago(15).likes(67))
        .await;
    let c = fixture
        .artwork(artist, ArtworkSpec::new("Baskets").created_days_ago(7).likes(89))
        .await;
    (fixture, [a, b, c])
}

#[tokio::test]
async fn most_liked_orders_by_like_count() {
    let (fixture, [a, b, c]) = scenario().await;
    let query = ArtworkQueryBuilder::new()
        .sort_by(ArtworkSort::MostLiked)
        .build();

    let page = fixture.catalogue.list_artworks(&query).await.unwrap();
    let likes: Vec<u32> = page.items.iter().map(|e| e.artwork.like_count).collect();

    assert_eq!(likes, vec![89, 67, 45]);
    assert_eq!(ids(&page.items), vec![c, b, a]);
}

#[tokio::test]
async fn oldest_orders_by_creation() {
    let (fixture, [a, b, c]) = scenario().await;
    let query = ArtworkQueryBuilder::new().sort_by(ArtworkSort::Oldest).build();

    let page = fixture.catalogue.list_artworks(&query).await.unwrap();
    let created: Vec<_> = page.items.iter().map(|e| e.artwork.created_at).collect();

    assert_eq!(created, vec![days_ago(30), days_ago(15), days_ago(7)]);
    assert_eq!(ids(&page.items), vec![a, b, c]);
}

#[tokio::test]
async fn default_sort_is_newest() {
    let (fixture, [a, b, c]) = scenario().await;
    let page = fixture
        .catalogue
        .list_artworks(&ArtworkQueryBuilder::new().build())
        .await
        .unwrap();
    assert_eq!(ids(&page.items), vec![c, b, a]);
}

#[tokio::test]
async fn five_results_in_pages_of_two() {
    let fixture = Fixture::new();
    let artist = fixture.artist("Fatima Al Saidi").await;
    for day in 1..=5 {
        fixture
            .artwork(
                artist,
                ArtworkSpec::new(&format!("Frame {day}")).created_days_ago(day),
            )
            .await;
    }

    let mut sizes = Vec::new();
    let mut seen = Vec::new();
    for page_number in 1..=3 {
        let query = ArtworkQueryBuilder::new().page(page_number, 2).build();
        let page = fixture.catalogue.list_artworks(&query).await.unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages(), 3);
        sizes.push(page.items.len());
        seen.extend(ids(&page.items));
    }

    assert_eq!(sizes, vec![2, 2, 1]);
    let unpaged = fixture
        .catalogue
        .list_artworks(&ArtworkQueryBuilder::new().page(1, 100).build())
        .await
        .unwrap();
    assert_eq!(seen, ids(&unpaged.items));
}

/// Five artworks sharing dates, likes, prices and titles that differ only
/// in case, so every key needs the id tie-break somewhere.
async fn tied_artworks() -> Fixture {
    let fixture = Fixture::new();
    let artist = fixture.artist("Reem Al Mahrouqi").await;
    let specs = [
        ArtworkSpec::new("Dunes").created_days_ago(3).likes(2).priced(100),
        ArtworkSpec::new("dunes").created_days_ago(3).likes(2).priced(100),
        ArtworkSpec::new("Pier").created_days_ago(5),
        ArtworkSpec::new("pier").created_days_ago(5).likes(2).priced(100),
        ArtworkSpec::new("Amber").created_days_ago(3),
    ];
    for spec in specs {
        fixture.artwork(artist, spec).await;
    }
    fixture
}

#[tokio::test]
async fn pages_concatenate_to_the_full_ordering_for_every_size() {
    let fixture = tied_artworks().await;

    for &sort in ArtworkSort::ALL {
        let unpaged = fixture
            .catalogue
            .list_artworks(&ArtworkQueryBuilder::new().sort_by(sort).page(1, 100).build())
            .await
            .unwrap();
        let expected = ids(&unpaged.items);
        let n = expected.len();
        assert_eq!(n, 5);

        for size in 1..=n + 1 {
            let mut joined = Vec::new();
            let mut page_number = 1;
            loop {
                let query = ArtworkQueryBuilder::new()
                    .sort_by(sort)
                    .page(page_number, size as i64)
                    .build();
                let page = fixture.catalogue.list_artworks(&query).await.unwrap();
                assert_eq!(page.total, n);
                if page.items.is_empty() {
                    break;
                }
                assert!(page.items.len() <= size);
                joined.extend(ids(&page.items));
                page_number += 1;
            }
            assert_eq!(joined, expected, "sort {sort}, page size {size}");
            assert_eq!(page_number - 1, n.div_ceil(size) as i64);
        }
    }
}

fn assert_total_order<T, K>(items: &[T], key: K, label: &str)
where
    T: SortableEntry,
    K: EntryOrder<T> + std::fmt::Display,
{
    for pair in items.windows(2) {
        let ordered = match key.compare(&pair[0], &pair[1]) {
            Ordering::Less => true,
            Ordering::Equal => pair[0].sort_id() < pair[1].sort_id(),
            Ordering::Greater => false,
        };
        assert!(
            ordered,
            "{label} sorted by {key}: {} before {}",
            pair[0].sort_id(),
            pair[1].sort_id()
        );
    }
}

#[tokio::test]
async fn out_of_range_page_is_empty_with_total() {
    let (fixture, _) = scenario().await;
    let query = ArtworkQueryBuilder::new().page(9, 2).build();
    let page = fixture.catalogue.list_artworks(&query).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 3);
    assert!(!page.has_next());
}

#[tokio::test]
async fn public_listing_hides_inactive_artworks_and_admin_sees_them() {
    let fixture = Fixture::new();
    let artist = fixture.artist("Ahmed Al Balushi").await;
    fixture.artwork(artist, ArtworkSpec::new("Khanjar")).await;
    fixture
        .artwork(artist, ArtworkSpec::new("Silver bowl").status(ArtworkStatus::Sold))
        .await;
    fixture
        .artwork(artist, ArtworkSpec::new("Old draft").status(ArtworkStatus::Archived))
        .await;

    let public = fixture
        .catalogue
        .list_artworks(&ArtworkQueryBuilder::new().build())
        .await
        .unwrap();
    assert_eq!(public.total, 1);

    let admin = fixture
        .catalogue
        .list_artworks(&ArtworkQueryBuilder::new().admin().build())
        .await
        .unwrap();
    assert_eq!(admin.total, 3);

    let sold = fixture
        .catalogue
        .list_artworks(
            &ArtworkQueryBuilder::new()
                .admin()
                .with_status(ArtworkStatus::Sold)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(sold.total, 1);
    assert_eq!(sold.items[0].artwork.title, "Silver bowl");
}

#[tokio::test]
async fn search_reaches_the_artist_name() {
    let fixture = Fixture::new();
    let harthi = fixture.artist("Mohammed Al Harthi").await;
    let saidi = fixture.artist("Fatima Al Saidi").await;
    fixture.artwork(harthi, ArtworkSpec::new("Dunes")).await;
    fixture.artwork(saidi, ArtworkSpec::new("Pier")).await;

    let page = fixture
        .catalogue
        .list_artworks(&ArtworkQueryBuilder::new().search("HARTHI").build())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].artist_name, "Mohammed Al Harthi");
}

#[tokio::test]
async fn adding_a_filter_never_grows_the_result() {
    let fixture = Fixture::new();
    let artist = fixture.artist("Layla Al Hinai").await;
    let other = fixture.artist("Salim Al Rawahi").await;
    fixture
        .artwork(artist, ArtworkSpec::new("Falaj").of_type(ArtworkType::Photography).priced(90))
        .await;
    fixture
        .artwork(artist, ArtworkSpec::new("Harbour").of_type(ArtworkType::Painting))
        .await;
    fixture
        .artwork(other, ArtworkSpec::new("Fort").of_type(ArtworkType::Photography))
        .await;

    let by_type = ArtworkQueryBuilder::new()
        .of_type(ArtworkType::Photography)
        .admin();
    let narrower = by_type.clone().by_artist(artist);
    let narrowest = narrower.clone().for_sale();

    let a = fixture.catalogue.list_artworks(&by_type.build()).await.unwrap();
    let ab = fixture.catalogue.list_artworks(&narrower.build()).await.unwrap();
    let abc = fixture.catalogue.list_artworks(&narrowest.build()).await.unwrap();

    assert_eq!((a.total, ab.total, abc.total), (2, 1, 1));
    for entry in &ab.items {
        assert!(ids(&a.items).contains(&entry.artwork.id));
    }
    for entry in &abc.items {
        assert!(ids(&ab.items).contains(&entry.artwork.id));
    }
}

#[tokio::test]
async fn equal_keys_fall_back_to_ascending_id() {
    let fixture = Fixture::new();
    let artist = fixture.artist("Noor Al Amri").await;
    let mut expected = Vec::new();
    for n in 0..4 {
        expected.push(
            fixture
                .artwork(artist, ArtworkSpec::new(&format!("Twin {n}")).created_days_ago(3))
                .await,
        );
    }

    for sort in [ArtworkSort::Newest, ArtworkSort::Oldest, ArtworkSort::MostLiked] {
        let page = fixture
            .catalogue
            .list_artworks(&ArtworkQueryBuilder::new().sort_by(sort).build())
            .await
            .unwrap();
        assert_eq!(ids(&page.items), expected, "sort {sort}");
    }
}

#[tokio::test]
async fn every_artwork_key_is_a_total_order() {
    let fixture = tied_artworks().await;

    for &sort in ArtworkSort::ALL {
        let page = fixture
            .catalogue
            .list_artworks(&ArtworkQueryBuilder::new().sort_by(sort).page(1, 100).build())
            .await
            .unwrap();
        assert_eq!(page.items.len(), 5);
        assert_total_order(&page.items, sort, "artworks");
    }
}

#[tokio::test]
async fn every_artist_key_is_a_total_order() {
    let fixture = Fixture::new();
    let first = fixture.artist("Amal Noor").await;
    let twin = fixture
        .store
        .insert_artist(NewArtist {
            name: "amal noor".to_string(),
            email: "amal.second@gallery.test".to_string(),
            phone: String::new(),
            bio: "Second studio".to_string(),
            profile_image: String::new(),
            status: ArtistStatus::Active,
            joined_at: days_ago(100),
        })
        .await
        .unwrap()
        .id;
    let third = fixture
        .artist_with_status("Badr Al Shukaili", ArtistStatus::Inactive)
        .await;
    fixture.artist("Zahra Al Kalbani").await;
    for artist in [first, twin, third] {
        fixture.artwork(artist, ArtworkSpec::new("Study").likes(1)).await;
    }

    for &sort in ArtistSort::ALL {
        let page = fixture
            .catalogue
            .list_artists(&ArtistQueryBuilder::new().sort_by(sort).page(1, 100).admin().build())
            .await
            .unwrap();
        assert_eq!(page.items.len(), 4);
        assert_total_order(&page.items, sort, "artists");
    }
}

#[tokio::test]
async fn every_exhibition_key_is_a_total_order() {
    let fixture = Fixture::new();
    fixture.exhibition("Photography Week", 15, 22).await;
    fixture.exhibition("photography week", 15, 30).await;
    fixture.exhibition("Contemporary Omani Art", -10, 20).await;
    fixture.exhibition("Heritage Crafts Fair", -10, 45).await;

    for &sort in ExhibitionSort::ALL {
        let page = fixture
            .catalogue
            .list_exhibitions(
                &ExhibitionQueryBuilder::new()
                    .sort_by(sort)
                    .page(1, 100)
                    .admin()
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(page.items.len(), 4);
        assert_total_order(&page.items, sort, "exhibitions");
    }
}

#[tokio::test]
async fn price_sorts_treat_missing_price_as_zero() {
    let fixture = Fixture::new();
    let artist = fixture.artist("Huda Al Busaidi").await;
    let free = fixture.artwork(artist, ArtworkSpec::new("Sketch")).await;
    let cheap = fixture.artwork(artist, ArtworkSpec::new("Print").priced(40)).await;
    let dear = fixture.artwork(artist, ArtworkSpec::new("Canvas").priced(900)).await;

    let asc = fixture
        .catalogue
        .list_artworks(&ArtworkQueryBuilder::new().sort_by(ArtworkSort::PriceAsc).build())
        .await
        .unwrap();
    let desc = fixture
        .catalogue
        .list_artworks(&ArtworkQueryBuilder::new().sort_by(ArtworkSort::PriceDesc).build())
        .await
        .unwrap();

    assert_eq!(ids(&asc.items), vec![free, cheap, dear]);
    assert_eq!(ids(&desc.items), vec![dear, cheap, free]);
}

#[tokio::test]
async fn artist_listing_carries_aggregates() {
    let fixture = Fixture::new();
    let busy = fixture.artist("Busy Artist").await;
    let quiet = fixture.artist("Quiet Artist").await;
    fixture
        .artist_with_status("Away Artist", ArtistStatus::Inactive)
        .await;
    fixture.artwork(busy, ArtworkSpec::new("One").likes(2)).await;
    fixture.artwork(busy, ArtworkSpec::new("Two").likes(3)).await;
    fixture.artwork(quiet, ArtworkSpec::new("Three").likes(9)).await;

    let by_likes = fixture
        .catalogue
        .list_artists(&ArtistQueryBuilder::new().sort_by(ArtistSort::MostLiked).build())
        .await
        .unwrap();
    assert_eq!(by_likes.total, 2);
    assert_eq!(by_likes.items[0].artist.id, quiet);
    assert_eq!(by_likes.items[0].total_likes, 9);

    let by_count = fixture
        .catalogue
        .list_artists(&ArtistQueryBuilder::new().sort_by(ArtistSort::MostArtworks).build())
        .await
        .unwrap();
    assert_eq!(by_count.items[0].artist.id, busy);
    assert_eq!(by_count.items[0].artwork_count, 2);
}

#[tokio::test]
async fn exhibitions_resolve_status_against_today() {
    let fixture = Fixture::new();
    let running = fixture.exhibition("Contemporary Omani Art", -10, 20).await;
    let upcoming = fixture.exhibition("Photography Week", 15, 22).await;
    fixture.exhibition("Last Winter", -60, -30).await;

    let active = fixture
        .catalogue
        .list_exhibitions(
            &ExhibitionQueryBuilder::new()
                .with_status(ExhibitionStatus::Active)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(active.total, 1);
    assert_eq!(active.items[0].exhibition.id, running);

    let programme = fixture
        .catalogue
        .list_exhibitions(
            &ExhibitionQueryBuilder::new()
                .sort_by(ExhibitionSort::StartDate)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(programme.total, 3);
    assert_eq!(programme.items[1].exhibition.id, running);
    assert_eq!(programme.items[2].exhibition.id, upcoming);
}

#[tokio::test]
async fn home_and_dashboard_panels() {
    let (fixture, [_, _, top]) = scenario().await;
    let artist = fixture.artist("Fatima Al Saidi").await;
    fixture
        .artwork(artist, ArtworkSpec::new("Sold frame").status(ArtworkStatus::Sold))
        .await;
    fixture.exhibition("Contemporary Omani Art", -10, 20).await;
    fixture.exhibition("Heritage Crafts Fair", 30, 45).await;
    fixture.exhibition("Last Winter", -60, -30).await;

    let home = fixture.catalogue.home_highlights().await.unwrap();
    assert_eq!(home.most_liked.len(), 3);
    assert_eq!(home.most_liked[0].artwork.id, top);
    assert_eq!(home.exhibitions.len(), 2);
    assert_eq!(home.exhibitions[0].status, ExhibitionStatus::Active);
    assert_eq!(home.featured_artists[0].artwork_count, 3);

    let stats = fixture.catalogue.dashboard_stats().await.unwrap();
    assert_eq!(stats.total_artists, 2);
    assert_eq!(stats.total_artworks, 4);
    assert_eq!(stats.total_exhibitions, 3);
    assert_eq!(stats.active_exhibitions, 1);
    assert_eq!(stats.total_likes, 45 + 67 + 89);
    assert_eq!(stats.recent_artworks.len(), 4);

    let types = fixture.catalogue.type_counts().await.unwrap();
    assert_eq!(types.len(), ArtworkType::ALL.len());
    let paintings = types
        .iter()
        .find(|t| t.artwork_type == ArtworkType::Painting)
        .unwrap();
    assert_eq!(paintings.count, 3);
}

#[tokio::test]
async fn details_list_related_work() {
    let fixture = Fixture::new();
    let artist = fixture.artist("Mohammed Al Harthi").await;
    let other = fixture.artist("Fatima Al Saidi").await;
    let subject = fixture.artwork(artist, ArtworkSpec::new("Dunes")).await;
    let same_artist = fixture
        .artwork(artist, ArtworkSpec::new("Wadi").of_type(ArtworkType::Sculpture).likes(1))
        .await;
    let same_type = fixture.artwork(other, ArtworkSpec::new("Souq").likes(5)).await;
    fixture
        .artwork(other, ArtworkSpec::new("Lens").of_type(ArtworkType::Photography))
        .await;

    let details = fixture
        .catalogue
        .artwork_details(subject, Some(&support::visitor(0)))
        .await
        .unwrap();

    assert_eq!(ids(&details.related), vec![same_type, same_artist]);
    assert!(!details.liked_by_viewer);
}

#[tokio::test]
async fn page_request_clamps() {
    let (fixture, _) = scenario().await;
    let query = ArtworkQueryBuilder::new()
        .build()
        .with_page(PageRequest::new(-4, 0));
    let page = fixture.catalogue.list_artworks(&query).await.unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 1);
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn deserialized_query_with_page_zero_lists_the_first_page() {
    let (fixture, [_, _, newest]) = scenario().await;
    let query: ArtworkQuery = serde_json::from_value(serde_json::json!({
        "filters": {},
        "sort": "newest",
        "page": { "page": 0, "page_size": 0 },
        "scope": "public"
    }))
    .unwrap();

    let page = fixture.catalogue.list_artworks(&query).await.unwrap();
    assert_eq!((page.page, page.page_size), (1, 1));
    assert_eq!(ids(&page.items), vec![newest]);
    assert_eq!(page.total, 3);
}
