//! Read side of the gallery: listings, detail views and aggregate panels.

use std::sync::Arc;

use gallery_model::{
    ArtistId, ArtistStatus, ArtworkId, ArtworkStatus, ArtworkType, ExhibitionId,
    ExhibitionStatus, LikeIdentity,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::Clock;
use crate::database::ports::CatalogueStore;
use crate::error::{CatalogueError, EntityKind, Result, report};
use crate::likes::LikeLedger;
use crate::query::{
    API_PAGE_SIZE, ArtistEntry, ArtistQuery, ArtistQueryBuilder, ArtistSort, ArtworkEntry,
    ArtworkQuery, ArtworkQueryBuilder, ArtworkSort, DEFAULT_PAGE_SIZE, ExhibitionEntry,
    ExhibitionQuery, ExhibitionSort, Page, run_listing, sort_entries,
};

/// Number of related artworks shown next to an artwork.
pub const RELATED_ARTWORKS: usize = 4;

/// Tunables for the listing surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogueSettings {
    /// Page size for the page/controller surface.
    pub default_page_size: u32,
    /// Page size for the JSON API when the caller sends none.
    pub api_page_size: u32,
    /// Whether visitors without an account may like artworks.
    pub allow_anonymous_likes: bool,
}

impl Default for CatalogueSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            api_page_size: API_PAGE_SIZE,
            allow_anonymous_likes: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkDetails {
    pub entry: ArtworkEntry,
    /// Active artworks by the same artist or of the same type, most liked
    /// first.
    pub related: Vec<ArtworkEntry>,
    pub liked_by_viewer: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub entry: ArtistEntry,
    /// The artist's active artworks, most liked first.
    pub artworks: Vec<ArtworkEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitionDetails {
    pub entry: ExhibitionEntry,
    /// Active artworks hung in the exhibition, newest first.
    pub artworks: Vec<ArtworkEntry>,
}

/// Landing page panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeHighlights {
    pub most_liked: Vec<ArtworkEntry>,
    pub newest: Vec<ArtworkEntry>,
    /// Running or upcoming exhibitions, earliest opening first.
    pub exhibitions: Vec<ExhibitionEntry>,
    pub featured_artists: Vec<ArtistEntry>,
}

/// Administration overview counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_artists: usize,
    pub active_artists: usize,
    pub total_artworks: usize,
    pub total_exhibitions: usize,
    pub active_exhibitions: usize,
    pub total_users: u64,
    pub total_likes: u64,
    pub recent_artworks: Vec<ArtworkEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    pub artwork_type: ArtworkType,
    pub count: usize,
}

/// Listing and detail service over an injected store.
#[derive(Debug, Clone)]
pub struct Catalogue {
    store: Arc<dyn CatalogueStore>,
    clock: Arc<dyn Clock>,
    settings: CatalogueSettings,
}

impl Catalogue {
    pub fn new(
        store: Arc<dyn CatalogueStore>,
        clock: Arc<dyn Clock>,
        settings: CatalogueSettings,
    ) -> Self {
        Self {
            store,
            clock,
            settings,
        }
    }

    pub fn settings(&self) -> &CatalogueSettings {
        &self.settings
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Like ledger sharing this catalogue's store, clock and like policy.
    pub fn like_ledger(&self) -> LikeLedger {
        LikeLedger::new(self.store.clone(), self.clock.clone())
            .with_anonymous_likes(self.settings.allow_anonymous_likes)
    }

    pub async fn list_artworks(&self, query: &ArtworkQuery) -> Result<Page<ArtworkEntry>> {
        let entries = self
            .store
            .artwork_entries()
            .await
            .inspect_err(|err| report(err, "list artworks"))?;

        let page = run_listing(entries, query);
        debug!(
            total = page.total,
            page = page.page,
            sort = %query.sort,
            "artwork listing"
        );
        Ok(page)
    }

    pub async fn list_artists(&self, query: &ArtistQuery) -> Result<Page<ArtistEntry>> {
        let entries = self
            .store
            .artist_entries()
            .await
            .inspect_err(|err| report(err, "list artists"))?;

        let page = run_listing(entries, query);
        debug!(total = page.total, page = page.page, sort = %query.sort, "artist listing");
        Ok(page)
    }

    pub async fn list_exhibitions(
        &self,
        query: &ExhibitionQuery,
    ) -> Result<Page<ExhibitionEntry>> {
        let entries = self.exhibition_entries().await?;

        let page = run_listing(entries, query);
        debug!(total = page.total, page = page.page, sort = %query.sort, "exhibition listing");
        Ok(page)
    }

    /// One artwork with related works and whether `viewer` has liked it.
    pub async fn artwork_details(
        &self,
        id: ArtworkId,
        viewer: Option<&LikeIdentity>,
    ) -> Result<ArtworkDetails> {
        let entries = self
            .store
            .artwork_entries()
            .await
            .inspect_err(|err| report(err, "artwork details"))?;

        let entry = entries
            .iter()
            .find(|entry| entry.artwork.id == id)
            .cloned()
            .ok_or_else(|| CatalogueError::not_found(EntityKind::Artwork, id))?;

        let mut related: Vec<ArtworkEntry> = entries
            .into_iter()
            .filter(|other| {
                other.artwork.id != id
                    && other.artwork.status == ArtworkStatus::Active
                    && (other.artwork.artist_id == entry.artwork.artist_id
                        || other.artwork.artwork_type == entry.artwork.artwork_type)
            })
            .collect();
        sort_entries(&mut related, ArtworkSort::MostLiked);
        related.truncate(RELATED_ARTWORKS);

        let liked_by_viewer = match viewer {
            Some(identity) => self.store.find_like(id, identity).await?.is_some(),
            None => false,
        };

        Ok(ArtworkDetails {
            entry,
            related,
            liked_by_viewer,
        })
    }

    pub async fn artist_profile(&self, id: ArtistId) -> Result<ArtistProfile> {
        let entry = self
            .store
            .artist_entry(id)
            .await?
            .ok_or_else(|| CatalogueError::not_found(EntityKind::Artist, id))?;

        let query = ArtworkQueryBuilder::new()
            .by_artist(id)
            .sort_by(ArtworkSort::MostLiked)
            .page(1, i64::from(u32::MAX))
            .build();
        let artworks = run_listing(self.store.artwork_entries().await?, &query).items;

        Ok(ArtistProfile { entry, artworks })
    }

    pub async fn exhibition_details(&self, id: ExhibitionId) -> Result<ExhibitionDetails> {
        let entry = self
            .exhibition_entries()
            .await?
            .into_iter()
            .find(|entry| entry.exhibition.id == id)
            .ok_or_else(|| CatalogueError::not_found(EntityKind::Exhibition, id))?;

        let query = ArtworkQueryBuilder::new()
            .in_exhibition(id)
            .page(1, i64::from(u32::MAX))
            .build();
        let artworks = run_listing(self.store.artwork_entries().await?, &query).items;

        Ok(ExhibitionDetails { entry, artworks })
    }

    pub async fn home_highlights(&self) -> Result<HomeHighlights> {
        let artworks = self
            .store
            .artwork_entries()
            .await
            .inspect_err(|err| report(err, "home highlights"))?;

        let most_liked = run_listing(
            artworks.clone(),
            &ArtworkQueryBuilder::new()
                .sort_by(ArtworkSort::MostLiked)
                .page(1, 6)
                .build(),
        )
        .items;
        let newest = run_listing(
            artworks,
            &ArtworkQueryBuilder::new()
                .sort_by(ArtworkSort::Newest)
                .page(1, 6)
                .build(),
        )
        .items;

        let mut exhibitions: Vec<ExhibitionEntry> = self
            .exhibition_entries()
            .await?
            .into_iter()
            .filter(|entry| {
                matches!(entry.status, ExhibitionStatus::Upcoming | ExhibitionStatus::Active)
            })
            .collect();
        sort_entries(&mut exhibitions, ExhibitionSort::StartDate);
        exhibitions.truncate(3);

        let featured_artists = run_listing(
            self.store.artist_entries().await?,
            &ArtistQueryBuilder::new()
                .sort_by(ArtistSort::MostArtworks)
                .page(1, 4)
                .build(),
        )
        .items;

        Ok(HomeHighlights {
            most_liked,
            newest,
            exhibitions,
            featured_artists,
        })
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let artists = self
            .store
            .artist_entries()
            .await
            .inspect_err(|err| report(err, "dashboard stats"))?;
        let mut artworks = self.store.artwork_entries().await?;
        let exhibitions = self.exhibition_entries().await?;
        let total_users = self.store.count_users().await?;

        let total_likes = artworks
            .iter()
            .map(|entry| u64::from(entry.artwork.like_count))
            .sum();
        let total_artworks = artworks.len();

        sort_entries(&mut artworks, ArtworkSort::Newest);
        artworks.truncate(5);

        Ok(DashboardStats {
            total_artists: artists.len(),
            active_artists: artists
                .iter()
                .filter(|entry| entry.artist.status == ArtistStatus::Active)
                .count(),
            total_artworks,
            total_exhibitions: exhibitions.len(),
            active_exhibitions: exhibitions
                .iter()
                .filter(|entry| entry.status == ExhibitionStatus::Active)
                .count(),
            total_users,
            total_likes,
            recent_artworks: artworks,
        })
    }

    /// Active artworks per type, every type listed.
    pub async fn type_counts(&self) -> Result<Vec<TypeCount>> {
        let artworks = self.store.artwork_entries().await?;

        Ok(ArtworkType::ALL
            .iter()
            .map(|&artwork_type| TypeCount {
                artwork_type,
                count: artworks
                    .iter()
                    .filter(|entry| {
                        entry.artwork.status == ArtworkStatus::Active
                            && entry.artwork.artwork_type == artwork_type
                    })
                    .count(),
            })
            .collect())
    }

    async fn exhibition_entries(&self) -> Result<Vec<ExhibitionEntry>> {
        let today = self.clock.today();
        let rows = self
            .store
            .exhibitions_with_counts()
            .await
            .inspect_err(|err| report(err, "list exhibitions"))?;

        Ok(rows
            .into_iter()
            .map(|(exhibition, count)| ExhibitionEntry::resolve(exhibition, count, today))
            .collect())
    }
}
