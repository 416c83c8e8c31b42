use std::cmp::Ordering;

use super::keys::{ArtistSort, ArtworkSort, ExhibitionSort};
use super::traits::{EntryOrder, SortableEntry};
use crate::query::types::{ArtistEntry, ArtworkEntry, ExhibitionEntry};

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

impl SortableEntry for ArtworkEntry {
    fn sort_id(&self) -> i64 {
        self.artwork.id.get()
    }
}

impl SortableEntry for ArtistEntry {
    fn sort_id(&self) -> i64 {
        self.artist.id.get()
    }
}

impl SortableEntry for ExhibitionEntry {
    fn sort_id(&self) -> i64 {
        self.exhibition.id.get()
    }
}

impl EntryOrder<ArtworkEntry> for ArtworkSort {
    fn compare(&self, a: &ArtworkEntry, b: &ArtworkEntry) -> Ordering {
        let (a, b) = (&a.artwork, &b.artwork);
        match self {
            ArtworkSort::Newest => b.created_at.cmp(&a.created_at),
            ArtworkSort::Oldest => a.created_at.cmp(&b.created_at),
            ArtworkSort::MostLiked => b.like_count.cmp(&a.like_count),
            ArtworkSort::Title => compare_text(&a.title, &b.title),
            ArtworkSort::PriceAsc => a.sort_price().cmp(&b.sort_price()),
            ArtworkSort::PriceDesc => b.sort_price().cmp(&a.sort_price()),
        }
    }
}

impl EntryOrder<ArtistEntry> for ArtistSort {
    fn compare(&self, a: &ArtistEntry, b: &ArtistEntry) -> Ordering {
        match self {
            ArtistSort::Newest => b.artist.joined_at.cmp(&a.artist.joined_at),
            ArtistSort::Oldest => a.artist.joined_at.cmp(&b.artist.joined_at),
            ArtistSort::Name => compare_text(&a.artist.name, &b.artist.name),
            ArtistSort::MostLiked => b.total_likes.cmp(&a.total_likes),
            ArtistSort::MostArtworks => b.artwork_count.cmp(&a.artwork_count),
        }
    }
}

impl EntryOrder<ExhibitionEntry> for ExhibitionSort {
    fn compare(&self, a: &ExhibitionEntry, b: &ExhibitionEntry) -> Ordering {
        let (a, b) = (&a.exhibition, &b.exhibition);
        match self {
            ExhibitionSort::Newest => b.created_at.cmp(&a.created_at),
            ExhibitionSort::Oldest => a.created_at.cmp(&b.created_at),
            ExhibitionSort::Name => compare_text(&a.name, &b.name),
            ExhibitionSort::StartDate => a.start_date.cmp(&b.start_date),
        }
    }
}
