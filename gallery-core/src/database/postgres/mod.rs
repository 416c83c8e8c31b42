//! PostgreSQL implementation of the catalogue ports.
//!
//! Queries are checked at runtime so the crate builds without a live
//! database. Like mutations lock the artwork row (`SELECT ... FOR UPDATE`)
//! inside a transaction; partial unique indexes back the one-like-per-identity
//! rule.

mod artists;
mod artworks;
mod exhibitions;
mod likes;
mod rows;
mod users;

use std::fmt;
use std::time::Duration;

use gallery_model::ModelError;
use sqlx::PgPool;
use sqlx::error::ErrorKind as SqlErrorKind;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::error::{CatalogueError, EntityKind, Result};

#[derive(Clone)]
pub struct PostgresCatalogueStore {
    pool: PgPool,
}

impl fmt::Debug for PostgresCatalogueStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresCatalogueStore")
            .field("pool_size", &self.pool.size())
            .field("idle_connections", &self.pool.num_idle())
            .finish()
    }
}

impl PostgresCatalogueStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| {
                CatalogueError::Internal(format!("Failed to connect to database: {}", e))
            })?;

        info!(max_connections, "connected to catalogue database");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the embedded migrations.
    pub async fn migrate(&self) -> Result<()> {
        crate::MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| CatalogueError::Internal(format!("Migration failed: {}", e)))?;
        info!("catalogue migrations applied");
        Ok(())
    }
}

/// SQLSTATE for a string too long for its column.
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

/// Map a driver error onto the caller-facing taxonomy. Constraint violations
/// and over-long strings become conflicts, missing references or input
/// errors; everything else is internal and keeps `context` for the logs.
pub(crate) fn translate(err: sqlx::Error, context: &str) -> CatalogueError {
    if let Some(db) = err.as_database_error() {
        if db.code().as_deref() == Some(STRING_DATA_RIGHT_TRUNCATION) {
            return CatalogueError::invalid("a value is longer than its column allows");
        }
        let constraint = db.constraint().unwrap_or_default();
        match db.kind() {
            SqlErrorKind::UniqueViolation => {
                return CatalogueError::Conflict(unique_message(constraint).to_string());
            }
            SqlErrorKind::ForeignKeyViolation => {
                return CatalogueError::missing_reference(referenced_entity(constraint));
            }
            SqlErrorKind::CheckViolation => {
                return CatalogueError::invalid(check_message(constraint));
            }
            _ => {}
        }
    }
    CatalogueError::Internal(format!("{context}: {err}"))
}

fn unique_message(constraint: &str) -> &'static str {
    match constraint {
        "artists_email_key" => "an artist with this email already exists",
        "users_username_key" => "username is already taken",
        "users_email_key" => "email is already registered",
        "likes_user_key" | "likes_anonymous_key" => "artwork already liked",
        _ => "a record with the same unique value already exists",
    }
}

fn referenced_entity(constraint: &str) -> EntityKind {
    match constraint {
        "artworks_artist_id_fkey" => EntityKind::Artist,
        "artworks_exhibition_id_fkey" => EntityKind::Exhibition,
        "likes_user_id_fkey" => EntityKind::User,
        _ => EntityKind::Artwork,
    }
}

fn check_message(constraint: &str) -> String {
    match constraint {
        "exhibitions_dates_check" => "end date must be after the start date".to_string(),
        "likes_identity_check" => "a like needs a user or a network address".to_string(),
        other => format!("value rejected by {other}"),
    }
}

/// Stored data that no longer parses into the model.
pub(crate) fn corrupt(err: ModelError) -> CatalogueError {
    CatalogueError::Internal(format!("corrupt row: {err}"))
}

/// Non-negative database integer to counter.
pub(crate) fn counter(value: impl TryInto<u32>) -> u32 {
    value.try_into().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_keys_map_to_entities() {
        assert_eq!(referenced_entity("artworks_artist_id_fkey"), EntityKind::Artist);
        assert_eq!(
            referenced_entity("artworks_exhibition_id_fkey"),
            EntityKind::Exhibition
        );
        assert_eq!(referenced_entity("likes_artwork_id_fkey"), EntityKind::Artwork);
    }

    #[test]
    fn non_database_errors_are_internal() {
        let err = translate(sqlx::Error::RowNotFound, "load artist");
        assert!(matches!(err, CatalogueError::Internal(ref m) if m.starts_with("load artist")));
    }
}
