use gallery_model::{ArtworkId, ArtworkStatus, ModelError};
use std::fmt;
use thiserror::Error;

/// Kind of record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Artist,
    Artwork,
    Exhibition,
    Like,
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Artist => "artist",
            EntityKind::Artwork => "artwork",
            EntityKind::Exhibition => "exhibition",
            EntityKind::Like => "like",
            EntityKind::User => "user",
        })
    }
}

/// Caller-facing category of a [`CatalogueError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request was malformed; the message list says how.
    Input,
    NotFound,
    /// An expected, recoverable clash with existing state.
    Conflict,
    /// Anything else. Details stay in the logs.
    System,
}

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("invalid input: {}", .0.join("; "))]
    InvalidInput(Vec<String>),

    #[error("{entity} not found{}", .id.map(|id| format!(" (id {id})")).unwrap_or_default())]
    NotFound { entity: EntityKind, id: Option<i64> },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("artwork {artwork_id} cannot be liked while {status}")]
    NotLikeable {
        artwork_id: ArtworkId,
        status: ArtworkStatus,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl CatalogueError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CatalogueError::InvalidInput(vec![message.into()])
    }

    pub fn not_found(entity: EntityKind, id: impl Into<i64>) -> Self {
        CatalogueError::NotFound {
            entity,
            id: Some(id.into()),
        }
    }

    /// A dangling reference whose id is not known at the point of failure.
    pub fn missing_reference(entity: EntityKind) -> Self {
        CatalogueError::NotFound { entity, id: None }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogueError::InvalidInput(_) => ErrorKind::Input,
            CatalogueError::NotFound { .. } => ErrorKind::NotFound,
            CatalogueError::Conflict(_) | CatalogueError::NotLikeable { .. } => {
                ErrorKind::Conflict
            }
            CatalogueError::Internal(_) => ErrorKind::System,
        }
    }

    /// Expected conditions are reported to the caller but are not failures of
    /// the system itself.
    pub fn is_expected(&self) -> bool {
        self.kind() != ErrorKind::System
    }

    /// Messages safe to hand back to a client. System errors collapse to a
    /// generic line.
    pub fn client_messages(&self) -> Vec<String> {
        match self {
            CatalogueError::InvalidInput(messages) => messages.clone(),
            CatalogueError::Internal(_) => vec!["An unexpected error occurred".to_string()],
            other => vec![other.to_string()],
        }
    }
}

impl From<ModelError> for CatalogueError {
    fn from(err: ModelError) -> Self {
        CatalogueError::InvalidInput(vec![err.to_string()])
    }
}

pub type Result<T> = std::result::Result<T, CatalogueError>;

/// Log a failed operation at a level matching its kind. Expected conditions
/// stay at debug; system failures keep their internal detail in the log.
pub(crate) fn report(err: &CatalogueError, operation: &str) {
    if err.is_expected() {
        tracing::debug!(operation, %err, "request rejected");
    } else {
        tracing::error!(operation, %err, "catalogue operation failed");
    }
}
