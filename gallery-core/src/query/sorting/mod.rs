//! Deterministic ordering of listing entries.
//!
//! Every sort key is a primary comparison followed by ascending id, so the
//! result is a total order and pages stay stable across repeated requests.

mod impls;
pub mod keys;
pub mod traits;

use std::cmp::Ordering;

pub use keys::{ArtistSort, ArtworkSort, ExhibitionSort, UnknownSortKey};
pub use traits::{EntryOrder, SortableEntry};

/// Compare two entries by `key`, breaking ties by ascending id.
pub fn compare_entries<T, K>(a: &T, b: &T, key: K) -> Ordering
where
    T: SortableEntry,
    K: EntryOrder<T>,
{
    key.compare(a, b)
        .then_with(|| a.sort_id().cmp(&b.sort_id()))
}

/// Sort entries in place by `key` with the id tie-break.
pub fn sort_entries<T, K>(items: &mut [T], key: K)
where
    T: SortableEntry,
    K: EntryOrder<T>,
{
    items.sort_by(|a, b| compare_entries(a, b, key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::types::ArtworkEntry;
    use chrono::{Duration, TimeZone, Utc};
    use gallery_model::{ArtistId, Artwork, ArtworkId, ArtworkStatus, ArtworkType};
    use rust_decimal::Decimal;

    fn entry(id: i64, days_ago: i64, likes: u32, title: &str, price: Option<i64>) -> ArtworkEntry {
        let base = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        ArtworkEntry {
            artwork: Artwork {
                id: ArtworkId(id),
                title: title.into(),
                description: "Sample description".into(),
                image: String::new(),
                artwork_type: ArtworkType::Painting,
                status: ArtworkStatus::Active,
                like_count: likes,
                price: price.map(Decimal::from),
                for_sale: price.is_some(),
                created_at: base - Duration::days(days_ago),
                artist_id: ArtistId(1),
                exhibition_id: None,
            },
            artist_name: "Aisha".into(),
        }
    }

    fn ids(items: &[ArtworkEntry]) -> Vec<i64> {
        items.iter().map(|e| e.artwork.id.get()).collect()
    }

    #[test]
    fn ties_resolve_by_ascending_id() {
        let mut items = vec![
            entry(3, 1, 10, "c", None),
            entry(1, 1, 10, "a", None),
            entry(2, 1, 10, "b", None),
        ];
        sort_entries(&mut items, ArtworkSort::MostLiked);
        assert_eq!(ids(&items), vec![1, 2, 3]);
        sort_entries(&mut items, ArtworkSort::Newest);
        assert_eq!(ids(&items), vec![1, 2, 3]);
    }

    #[test]
    fn missing_price_orders_as_zero() {
        let mut items = vec![
            entry(1, 0, 0, "a", Some(250)),
            entry(2, 0, 0, "b", None),
            entry(3, 0, 0, "c", Some(40)),
        ];
        sort_entries(&mut items, ArtworkSort::PriceAsc);
        assert_eq!(ids(&items), vec![2, 3, 1]);
        sort_entries(&mut items, ArtworkSort::PriceDesc);
        assert_eq!(ids(&items), vec![1, 3, 2]);
    }

    #[test]
    fn title_ignores_case() {
        let mut items = vec![
            entry(1, 0, 0, "zephyr", None),
            entry(2, 0, 0, "Amber", None),
            entry(3, 0, 0, "banyan", None),
        ];
        sort_entries(&mut items, ArtworkSort::Title);
        assert_eq!(ids(&items), vec![2, 3, 1]);
    }
}
