//! Process-local store behind the same ports as PostgreSQL.
//!
//! All state sits behind one `RwLock`; every mutation, including the like
//! check-insert-increment, runs under a single write guard.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gallery_model::{
    Artist, ArtistId, Artwork, ArtworkId, Exhibition, ExhibitionId, Like, LikeId, LikeIdentity,
    User, UserId, like::MAX_NETWORK_ADDRESS_LEN,
};
use tokio::sync::RwLock;

use super::ports::{
    ArtistRepository, ArtworkRepository, ExhibitionRepository, LikeRepository, NewArtist,
    NewArtwork, NewExhibition, NewUser, UserRepository,
};
use crate::error::{CatalogueError, EntityKind, Result};
use crate::likes::{LikeOutcome, UnlikeOutcome};
use crate::query::{ArtistEntry, ArtworkEntry};

#[derive(Debug, Default)]
struct Sequences {
    artist: i64,
    artwork: i64,
    exhibition: i64,
    like: i64,
    user: i64,
}

fn next(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

#[derive(Debug, Default)]
struct State {
    artists: BTreeMap<ArtistId, Artist>,
    artworks: BTreeMap<ArtworkId, Artwork>,
    exhibitions: BTreeMap<ExhibitionId, Exhibition>,
    likes: BTreeMap<LikeId, Like>,
    users: BTreeMap<UserId, User>,
    sequences: Sequences,
}

impl State {
    fn email_taken_by_artist(&self, email: &str, except: Option<ArtistId>) -> bool {
        self.artists
            .values()
            .any(|a| Some(a.id) != except && a.email.eq_ignore_ascii_case(email))
    }

    fn username_taken(&self, username: &str, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|u| Some(u.id) != except && u.username.eq_ignore_ascii_case(username))
    }

    fn user_email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|u| Some(u.id) != except && u.email.eq_ignore_ascii_case(email))
    }

    fn check_artwork_links(
        &self,
        artist_id: ArtistId,
        exhibition_id: Option<ExhibitionId>,
    ) -> Result<()> {
        if !self.artists.contains_key(&artist_id) {
            return Err(CatalogueError::not_found(EntityKind::Artist, artist_id));
        }
        if let Some(exhibition_id) = exhibition_id
            && !self.exhibitions.contains_key(&exhibition_id)
        {
            return Err(CatalogueError::not_found(EntityKind::Exhibition, exhibition_id));
        }
        Ok(())
    }

    fn artwork_entry(&self, artwork: &Artwork) -> ArtworkEntry {
        ArtworkEntry {
            artwork: artwork.clone(),
            artist_name: self
                .artists
                .get(&artwork.artist_id)
                .map(|artist| artist.name.clone())
                .unwrap_or_default(),
        }
    }

    fn artist_entry(&self, artist: &Artist) -> ArtistEntry {
        let (artwork_count, total_likes) = self
            .artworks
            .values()
            .filter(|artwork| artwork.artist_id == artist.id)
            .fold((0u32, 0u64), |(count, likes), artwork| {
                (count + 1, likes + u64::from(artwork.like_count))
            });

        ArtistEntry {
            artist: artist.clone(),
            artwork_count,
            total_likes,
        }
    }

    fn find_like(&self, artwork_id: ArtworkId, identity: &LikeIdentity) -> Option<&Like> {
        self.likes
            .values()
            .find(|like| like.artwork_id == artwork_id && identity.owns(like))
    }

    fn remove_likes_where(&mut self, doomed: impl Fn(&Like) -> bool) -> Vec<Like> {
        let ids: Vec<LikeId> = self
            .likes
            .values()
            .filter(|&like| doomed(like))
            .map(|like| like.id)
            .collect();
        ids.iter().filter_map(|id| self.likes.remove(id)).collect()
    }
}

/// In-memory [`CatalogueStore`](super::ports::CatalogueStore), used by tests,
/// demos and single-process embedding.
#[derive(Debug, Default)]
pub struct InMemoryCatalogueStore {
    state: RwLock<State>,
}

impl InMemoryCatalogueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArtistRepository for InMemoryCatalogueStore {
    async fn insert_artist(&self, artist: NewArtist) -> Result<Artist> {
        let mut state = self.state.write().await;
        if state.email_taken_by_artist(&artist.email, None) {
            return Err(CatalogueError::Conflict(format!(
                "an artist with email {} already exists",
                artist.email
            )));
        }

        let id = ArtistId(next(&mut state.sequences.artist));
        let record = Artist {
            id,
            name: artist.name,
            email: artist.email,
            phone: artist.phone,
            bio: artist.bio,
            profile_image: artist.profile_image,
            status: artist.status,
            joined_at: artist.joined_at,
        };
        state.artists.insert(id, record.clone());
        Ok(record)
    }

    async fn update_artist(&self, artist: &Artist) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.artists.contains_key(&artist.id) {
            return Err(CatalogueError::not_found(EntityKind::Artist, artist.id));
        }
        if state.email_taken_by_artist(&artist.email, Some(artist.id)) {
            return Err(CatalogueError::Conflict(format!(
                "an artist with email {} already exists",
                artist.email
            )));
        }
        state.artists.insert(artist.id, artist.clone());
        Ok(())
    }

    async fn delete_artist(&self, id: ArtistId) -> Result<()> {
        let mut state = self.state.write().await;
        if state.artists.remove(&id).is_none() {
            return Err(CatalogueError::not_found(EntityKind::Artist, id));
        }

        let owned: Vec<ArtworkId> = state
            .artworks
            .values()
            .filter(|artwork| artwork.artist_id == id)
            .map(|artwork| artwork.id)
            .collect();
        for artwork_id in &owned {
            state.artworks.remove(artwork_id);
        }
        state.remove_likes_where(|like| owned.contains(&like.artwork_id));
        Ok(())
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>> {
        Ok(self.state.read().await.artists.get(&id).cloned())
    }

    async fn find_artist_by_email(&self, email: &str) -> Result<Option<Artist>> {
        let state = self.state.read().await;
        Ok(state
            .artists
            .values()
            .find(|artist| artist.email.eq_ignore_ascii_case(email.trim()))
            .cloned())
    }

    async fn artist_entries(&self) -> Result<Vec<ArtistEntry>> {
        let state = self.state.read().await;
        Ok(state
            .artists
            .values()
            .map(|artist| state.artist_entry(artist))
            .collect())
    }

    async fn artist_entry(&self, id: ArtistId) -> Result<Option<ArtistEntry>> {
        let state = self.state.read().await;
        Ok(state.artists.get(&id).map(|artist| state.artist_entry(artist)))
    }
}

#[async_trait]
impl ArtworkRepository for InMemoryCatalogueStore {
    async fn insert_artwork(&self, artwork: NewArtwork) -> Result<Artwork> {
        let mut state = self.state.write().await;
        state.check_artwork_links(artwork.artist_id, artwork.exhibition_id)?;

        let id = ArtworkId(next(&mut state.sequences.artwork));
        let record = Artwork {
            id,
            title: artwork.title,
            description: artwork.description,
            image: artwork.image,
            artwork_type: artwork.artwork_type,
            status: artwork.status,
            like_count: 0,
            price: artwork.price,
            for_sale: artwork.for_sale,
            created_at: artwork.created_at,
            artist_id: artwork.artist_id,
            exhibition_id: artwork.exhibition_id,
        };
        state.artworks.insert(id, record.clone());
        Ok(record)
    }

    async fn update_artwork(&self, artwork: &Artwork) -> Result<()> {
        let mut state = self.state.write().await;
        let like_count = match state.artworks.get(&artwork.id) {
            Some(existing) => existing.like_count,
            None => return Err(CatalogueError::not_found(EntityKind::Artwork, artwork.id)),
        };
        state.check_artwork_links(artwork.artist_id, artwork.exhibition_id)?;

        let mut record = artwork.clone();
        record.like_count = like_count;
        state.artworks.insert(artwork.id, record);
        Ok(())
    }

    async fn delete_artwork(&self, id: ArtworkId) -> Result<()> {
        let mut state = self.state.write().await;
        if state.artworks.remove(&id).is_none() {
            return Err(CatalogueError::not_found(EntityKind::Artwork, id));
        }
        state.remove_likes_where(|like| like.artwork_id == id);
        Ok(())
    }

    async fn get_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>> {
        Ok(self.state.read().await.artworks.get(&id).cloned())
    }

    async fn artwork_entries(&self) -> Result<Vec<ArtworkEntry>> {
        let state = self.state.read().await;
        Ok(state
            .artworks
            .values()
            .map(|artwork| state.artwork_entry(artwork))
            .collect())
    }

    async fn artwork_entry(&self, id: ArtworkId) -> Result<Option<ArtworkEntry>> {
        let state = self.state.read().await;
        Ok(state.artworks.get(&id).map(|artwork| state.artwork_entry(artwork)))
    }

    async fn count_artworks_in_exhibition(&self, id: ExhibitionId) -> Result<u32> {
        let state = self.state.read().await;
        let count = state
            .artworks
            .values()
            .filter(|artwork| artwork.exhibition_id == Some(id))
            .count();
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }
}

#[async_trait]
impl ExhibitionRepository for InMemoryCatalogueStore {
    async fn insert_exhibition(&self, exhibition: NewExhibition) -> Result<Exhibition> {
        let mut state = self.state.write().await;
        let id = ExhibitionId(next(&mut state.sequences.exhibition));
        let record = Exhibition {
            id,
            name: exhibition.name,
            description: exhibition.description,
            start_date: exhibition.start_date,
            end_date: exhibition.end_date,
            location: exhibition.location,
            max_artworks: exhibition.max_artworks,
            status: exhibition.status,
            banner_image: exhibition.banner_image,
            created_at: exhibition.created_at,
        };
        state.exhibitions.insert(id, record.clone());
        Ok(record)
    }

    async fn update_exhibition(&self, exhibition: &Exhibition) -> Result<()> {
        let mut state = self.state.write().await;
        match state.exhibitions.get_mut(&exhibition.id) {
            Some(slot) => {
                *slot = exhibition.clone();
                Ok(())
            }
            None => Err(CatalogueError::not_found(EntityKind::Exhibition, exhibition.id)),
        }
    }

    async fn delete_exhibition(&self, id: ExhibitionId) -> Result<()> {
        let mut state = self.state.write().await;
        if state.exhibitions.remove(&id).is_none() {
            return Err(CatalogueError::not_found(EntityKind::Exhibition, id));
        }
        for artwork in state.artworks.values_mut() {
            if artwork.exhibition_id == Some(id) {
                artwork.exhibition_id = None;
            }
        }
        Ok(())
    }

    async fn get_exhibition(&self, id: ExhibitionId) -> Result<Option<Exhibition>> {
        Ok(self.state.read().await.exhibitions.get(&id).cloned())
    }

    async fn exhibitions_with_counts(&self) -> Result<Vec<(Exhibition, u32)>> {
        let state = self.state.read().await;
        Ok(state
            .exhibitions
            .values()
            .map(|exhibition| {
                let count = state
                    .artworks
                    .values()
                    .filter(|artwork| artwork.exhibition_id == Some(exhibition.id))
                    .count();
                (exhibition.clone(), u32::try_from(count).unwrap_or(u32::MAX))
            })
            .collect())
    }
}

#[async_trait]
impl LikeRepository for InMemoryCatalogueStore {
    async fn record_like(
        &self,
        artwork_id: ArtworkId,
        identity: &LikeIdentity,
        liked_at: DateTime<Utc>,
    ) -> Result<LikeOutcome> {
        let mut state = self.state.write().await;

        let (like_count, status, likeable) = match state.artworks.get(&artwork_id) {
            Some(artwork) => (artwork.like_count, artwork.status, artwork.can_be_liked()),
            None => return Err(CatalogueError::not_found(EntityKind::Artwork, artwork_id)),
        };
        if !likeable {
            return Err(CatalogueError::NotLikeable { artwork_id, status });
        }
        // same width as the likes.network_address column
        if identity
            .network_address()
            .is_some_and(|address| address.chars().count() > MAX_NETWORK_ADDRESS_LEN)
        {
            return Err(CatalogueError::invalid(
                "a value is longer than its column allows",
            ));
        }

        if let Some(existing) = state.find_like(artwork_id, identity) {
            return Ok(LikeOutcome::AlreadyLiked {
                like_count,
                liked_at: existing.liked_at,
            });
        }

        let id = LikeId(next(&mut state.sequences.like));
        state.likes.insert(
            id,
            Like {
                id,
                artwork_id,
                user_id: identity.user_id(),
                network_address: identity.network_address().map(str::to_string),
                liked_at,
            },
        );

        let like_count = match state.artworks.get_mut(&artwork_id) {
            Some(artwork) => artwork.increment_likes(),
            None => return Err(CatalogueError::not_found(EntityKind::Artwork, artwork_id)),
        };
        Ok(LikeOutcome::Liked {
            like_count,
            liked_at,
        })
    }

    async fn remove_like(
        &self,
        artwork_id: ArtworkId,
        identity: &LikeIdentity,
    ) -> Result<UnlikeOutcome> {
        let mut state = self.state.write().await;

        let current = match state.artworks.get(&artwork_id) {
            Some(artwork) => artwork.like_count,
            None => return Err(CatalogueError::not_found(EntityKind::Artwork, artwork_id)),
        };

        let existing = state.find_like(artwork_id, identity).map(|like| like.id);
        let Some(like_id) = existing else {
            return Ok(UnlikeOutcome::NotLiked {
                like_count: current,
            });
        };

        state.likes.remove(&like_id);
        let like_count = state
            .artworks
            .get_mut(&artwork_id)
            .map(Artwork::decrement_likes)
            .unwrap_or_default();
        Ok(UnlikeOutcome::Removed { like_count })
    }

    async fn find_like(
        &self,
        artwork_id: ArtworkId,
        identity: &LikeIdentity,
    ) -> Result<Option<Like>> {
        let state = self.state.read().await;
        Ok(state.find_like(artwork_id, identity).cloned())
    }

    async fn likes_by_user(&self, user_id: UserId) -> Result<Vec<Like>> {
        let state = self.state.read().await;
        let mut likes: Vec<Like> = state
            .likes
            .values()
            .filter(|like| like.user_id == Some(user_id))
            .cloned()
            .collect();
        likes.sort_by(|a, b| b.liked_at.cmp(&a.liked_at).then_with(|| b.id.cmp(&a.id)));
        Ok(likes)
    }

    async fn recount_likes(&self, artwork_id: ArtworkId) -> Result<u32> {
        let mut state = self.state.write().await;
        let count = state
            .likes
            .values()
            .filter(|like| like.artwork_id == artwork_id)
            .count();
        let count = u32::try_from(count).unwrap_or(u32::MAX);

        match state.artworks.get_mut(&artwork_id) {
            Some(artwork) => {
                artwork.like_count = count;
                Ok(count)
            }
            None => Err(CatalogueError::not_found(EntityKind::Artwork, artwork_id)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryCatalogueStore {
    async fn insert_user(&self, user: NewUser) -> Result<User> {
        let mut state = self.state.write().await;
        if state.username_taken(&user.username, None) {
            return Err(CatalogueError::Conflict(format!(
                "username {} is already taken",
                user.username
            )));
        }
        if state.user_email_taken(&user.email, None) {
            return Err(CatalogueError::Conflict(format!(
                "email {} is already registered",
                user.email
            )));
        }

        let id = UserId(next(&mut state.sequences.user));
        let record = User {
            id,
            username: user.username,
            password_hash: user.password_hash,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
            last_login_at: None,
        };
        state.users.insert(id, record.clone());
        Ok(record)
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.users.contains_key(&user.id) {
            return Err(CatalogueError::not_found(EntityKind::User, user.id));
        }
        if state.username_taken(&user.username, Some(user.id)) {
            return Err(CatalogueError::Conflict(format!(
                "username {} is already taken",
                user.username
            )));
        }
        if state.user_email_taken(&user.email, Some(user.id)) {
            return Err(CatalogueError::Conflict(format!(
                "email {} is already registered",
                user.email
            )));
        }
        state.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        let mut state = self.state.write().await;
        if state.users.remove(&id).is_none() {
            return Err(CatalogueError::not_found(EntityKind::User, id));
        }

        let removed = state.remove_likes_where(|like| like.user_id == Some(id));
        for like in removed {
            if let Some(artwork) = state.artworks.get_mut(&like.artwork_id) {
                artwork.decrement_likes();
            }
        }
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .find(|user| user.username.eq_ignore_ascii_case(username.trim()))
            .cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email.trim()))
            .cloned())
    }

    async fn count_users(&self) -> Result<u64> {
        Ok(self.state.read().await.users.len() as u64)
    }
}
