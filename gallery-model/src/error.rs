use std::fmt::{self, Display};

/// Errors produced by model constructors and parsing routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A textual or numeric enum value did not name any variant.
    UnknownVariant {
        kind: &'static str,
        value: String,
    },
    /// An identifier was not a positive integer.
    InvalidId {
        kind: &'static str,
        value: String,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownVariant { kind, value } => {
                write!(f, "'{value}' is not a valid {kind}")
            }
            ModelError::InvalidId { kind, value } => {
                write!(f, "'{value}' is not a valid {kind} id")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
