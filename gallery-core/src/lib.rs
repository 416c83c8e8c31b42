//! # Gallery Core
//!
//! Catalogue engine for an art gallery: listing queries over artworks,
//! artists and exhibitions, the like ledger, validated management services
//! and the storage behind them.
//!
//! ## Feature Flags
//!
//! - `database` (default): PostgreSQL store via SQLx, with embedded migrations
//! - `demo`: sample gallery content for local development
//!
//! ## Architecture
//!
//! - [`query`]: predicates, sort keys, pagination and the typed query builders
//! - [`catalogue`]: listing and detail views over an injected store
//! - [`likes`]: one like per identity per artwork, counters kept in step
//! - [`management`]: create/update/delete with collected validation messages
//! - [`database`]: repository ports plus in-memory and PostgreSQL stores
//! - [`api_types`]: JSON envelope, raw listing parameters and DTOs
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use gallery_core::{
//!     Catalogue, CatalogueSettings, InMemoryCatalogueStore, SystemClock,
//!     query::{ArtworkQueryBuilder, ArtworkSort},
//! };
//!
//! async fn most_liked() -> gallery_core::Result<()> {
//!     let catalogue = Catalogue::new(
//!         Arc::new(InMemoryCatalogueStore::new()),
//!         Arc::new(SystemClock),
//!         CatalogueSettings::default(),
//!     );
//!     let query = ArtworkQueryBuilder::new()
//!         .sort_by(ArtworkSort::MostLiked)
//!         .page(1, 6)
//!         .build();
//!     let page = catalogue.list_artworks(&query).await?;
//!     println!("{} of {} artworks", page.items.len(), page.total);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api_types;
pub mod catalogue;
pub mod clock;
pub mod database;
pub mod error;
pub mod likes;
pub mod management;
pub mod query;

#[cfg(feature = "demo")]
#[cfg_attr(docsrs, doc(cfg(feature = "demo")))]
pub mod demo;

pub use gallery_model as model;

pub use catalogue::{
    ArtistProfile, ArtworkDetails, Catalogue, CatalogueSettings, DashboardStats,
    ExhibitionDetails, HomeHighlights, TypeCount,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use database::{CatalogueStore, InMemoryCatalogueStore};
pub use error::{CatalogueError, EntityKind, ErrorKind, Result};
pub use likes::{LikeLedger, LikeOutcome, LikedArtwork, UnlikeOutcome};
pub use management::{Management, PasswordCrypto};

#[cfg(feature = "database")]
pub use database::PostgresCatalogueStore;

/// Embedded schema migrations for the PostgreSQL store.
#[cfg(feature = "database")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
