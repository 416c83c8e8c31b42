use crate::error::ModelError;
use std::str::FromStr;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                $name(value)
            }

            pub fn get(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                $name(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            /// Parses a positive integer id; zero and negatives are rejected.
            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim().parse::<i64>() {
                    Ok(id) if id > 0 => Ok($name(id)),
                    _ => Err(ModelError::InvalidId {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }
    };
}

record_id!(
    /// Identifier of an artist row
    ArtistId,
    "artist"
);
record_id!(
    /// Identifier of an artwork row
    ArtworkId,
    "artwork"
);
record_id!(
    /// Identifier of an exhibition row
    ExhibitionId,
    "exhibition"
);
record_id!(
    /// Identifier of a like row
    LikeId,
    "like"
);
record_id!(
    /// Identifier of a user account
    UserId,
    "user"
);
