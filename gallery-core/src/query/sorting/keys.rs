//! Named sort keys accepted by the listing surfaces.
//!
//! Key names are matched ignoring case and `_`/`-`/space separators, so
//! `mostLiked`, `most_liked` and `MOST-LIKED` are the same key.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::error::CatalogueError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {kind} sort; expected one of: {}", .allowed.join(", "))]
pub struct UnknownSortKey {
    pub kind: &'static str,
    pub value: String,
    pub allowed: &'static [&'static str],
}

impl From<UnknownSortKey> for CatalogueError {
    fn from(err: UnknownSortKey) -> Self {
        CatalogueError::InvalidInput(vec![err.to_string()])
    }
}

fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! sort_keys {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum $name {
            #[default]
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const KEYS: &'static [&'static str] = &[$($key),+];

            /// Canonical key name, as accepted by the listing surfaces.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            /// Page-surface parsing: absent or unrecognised keys fall back to
            /// the default ordering.
            pub fn parse_lenient(value: Option<&str>) -> Self {
                value
                    .and_then(|raw| raw.parse::<Self>().ok())
                    .unwrap_or_default()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = UnknownSortKey;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(value);
                $(
                    if normalize($key) == wanted $(|| normalize($alias) == wanted)* {
                        return Ok($name::$variant);
                    }
                )+
                Err(UnknownSortKey {
                    kind: $kind,
                    value: value.trim().to_string(),
                    allowed: $name::KEYS,
                })
            }
        }
    };
}

sort_keys! {
    /// Orderings for artwork listings
    pub enum ArtworkSort as "artwork" {
        /// Created timestamp, latest first.
        Newest => "newest",
        Oldest => "oldest",
        MostLiked => "mostLiked" | "popular",
        /// Case-insensitive title, A to Z.
        Title => "title",
        /// Absent prices order as zero.
        PriceAsc => "priceAsc",
        PriceDesc => "priceDesc",
    }
}

sort_keys! {
    /// Orderings for artist listings
    pub enum ArtistSort as "artist" {
        /// Joined timestamp, latest first.
        Newest => "newest",
        Oldest => "oldest",
        Name => "name",
        /// Sum of likes across the artist's artworks.
        MostLiked => "mostLiked" | "mostLikes",
        MostArtworks => "mostArtworks",
    }
}

sort_keys! {
    /// Orderings for exhibition listings
    pub enum ExhibitionSort as "exhibition" {
        Newest => "newest",
        Oldest => "oldest",
        Name => "name",
        /// Earliest opening first.
        StartDate => "startDate",
    }
}
