//! Raw listing parameters as they arrive from a query string.

use std::str::FromStr;

use gallery_model::{
    ArtistId, ArtistStatus, ArtworkStatus, ArtworkType, ExhibitionId, ExhibitionStatus,
    ModelError,
};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogueError, Result};
use crate::query::{
    ArtistFilters, ArtistQuery, ArtistSort, ArtworkFilters, ArtworkQuery, ArtworkSort,
    ExhibitionFilters, ExhibitionQuery, ExhibitionSort, ListingQuery, ListingScope,
    PageRequest,
};

/// How unparsable filter values are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Page surface: a bad value means "no filter".
    #[default]
    Lenient,
    /// JSON API: a bad value rejects the request.
    Strict,
}

/// Shared conversion state: the mode plus any messages gathered so far.
struct Parser {
    mode: ParseMode,
    errors: Vec<String>,
}

impl Parser {
    fn new(mode: ParseMode) -> Self {
        Self {
            mode,
            errors: Vec::new(),
        }
    }

    fn filter<T>(&mut self, raw: Option<&str>) -> Option<T>
    where
        T: FromStr<Err = ModelError>,
    {
        let raw = raw.map(str::trim).filter(|raw| !raw.is_empty())?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(err) => {
                if self.mode == ParseMode::Strict {
                    self.errors.push(err.to_string());
                }
                None
            }
        }
    }

    fn id<T: From<i64>>(&mut self, name: &str, raw: Option<i64>) -> Option<T> {
        match raw {
            Some(id) if id > 0 => Some(T::from(id)),
            Some(id) => {
                if self.mode == ParseMode::Strict {
                    self.errors.push(format!("{name} must be positive, got {id}"));
                }
                None
            }
            None => None,
        }
    }

    fn finish<F, S>(self, query: ListingQuery<F, S>) -> Result<ListingQuery<F, S>> {
        if self.errors.is_empty() {
            Ok(query)
        } else {
            Err(CatalogueError::InvalidInput(self.errors))
        }
    }
}

fn search(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
}

fn page(page: Option<i64>, page_size: Option<i64>, default_size: u32) -> PageRequest {
    PageRequest::new(
        page.unwrap_or(1),
        page_size.unwrap_or(i64::from(default_size)),
    )
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtworkListParams {
    #[serde(alias = "search")]
    pub search_term: Option<String>,
    #[serde(rename = "type")]
    pub artwork_type: Option<String>,
    pub status: Option<String>,
    pub artist_id: Option<i64>,
    pub exhibition_id: Option<i64>,
    pub for_sale: Option<bool>,
    pub sort_by: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ArtworkListParams {
    /// Unknown sort keys fall back to newest in either mode.
    pub fn to_query(
        &self,
        mode: ParseMode,
        default_page_size: u32,
        scope: ListingScope,
    ) -> Result<ArtworkQuery> {
        let mut parser = Parser::new(mode);
        let filters = ArtworkFilters {
            search: search(self.search_term.as_deref()),
            artwork_type: parser.filter::<ArtworkType>(self.artwork_type.as_deref()),
            status: parser.filter::<ArtworkStatus>(self.status.as_deref()),
            artist_id: parser.id::<ArtistId>("artistId", self.artist_id),
            exhibition_id: parser.id::<ExhibitionId>("exhibitionId", self.exhibition_id),
            for_sale: self.for_sale,
        };

        parser.finish(ListingQuery {
            filters,
            sort: ArtworkSort::parse_lenient(self.sort_by.as_deref()),
            page: page(self.page, self.page_size, default_page_size),
            scope,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtistListParams {
    #[serde(alias = "search")]
    pub search_term: Option<String>,
    pub status: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ArtistListParams {
    pub fn to_query(
        &self,
        mode: ParseMode,
        default_page_size: u32,
        scope: ListingScope,
    ) -> Result<ArtistQuery> {
        let mut parser = Parser::new(mode);
        let filters = ArtistFilters {
            search: search(self.search_term.as_deref()),
            status: parser.filter::<ArtistStatus>(self.status.as_deref()),
        };

        parser.finish(ListingQuery {
            filters,
            sort: ArtistSort::parse_lenient(self.sort_by.as_deref()),
            page: page(self.page, self.page_size, default_page_size),
            scope,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExhibitionListParams {
    #[serde(alias = "search")]
    pub search_term: Option<String>,
    pub status: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ExhibitionListParams {
    pub fn to_query(
        &self,
        mode: ParseMode,
        default_page_size: u32,
        scope: ListingScope,
    ) -> Result<ExhibitionQuery> {
        let mut parser = Parser::new(mode);
        let filters = ExhibitionFilters {
            search: search(self.search_term.as_deref()),
            status: parser.filter::<ExhibitionStatus>(self.status.as_deref()),
        };

        parser.finish(ListingQuery {
            filters,
            sort: ExhibitionSort::parse_lenient(self.sort_by.as_deref()),
            page: page(self.page, self.page_size, default_page_size),
            scope,
        })
    }
}
