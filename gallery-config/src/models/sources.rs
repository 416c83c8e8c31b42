use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::util::{non_blank, parse_bool};

/// Raw configuration as written in `gallery.toml`.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub database: FileDatabaseConfig,
    #[serde(default)]
    pub catalogue: FileCatalogueConfig,
    #[serde(default)]
    pub logging: FileLoggingConfig,
    #[serde(default)]
    pub auth: FileAuthConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileDatabaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileCatalogueConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_anonymous_likes: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileAuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_pepper: Option<String>,
}

/// Environment-derived configuration values.
///
/// Numeric and boolean variables that fail to parse are kept as raw strings
/// in `unparsed` so the loader can report them instead of silently falling
/// back.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub database_url: Option<String>,
    pub database_url_file: Option<PathBuf>,
    pub database_password: Option<String>,
    pub database_password_file: Option<PathBuf>,
    pub database_max_connections: Option<u32>,
    pub default_page_size: Option<u32>,
    pub api_page_size: Option<u32>,
    pub allow_anonymous_likes: Option<bool>,
    pub log_filter: Option<String>,
    pub password_pepper: Option<String>,
    pub dev_mode: Option<bool>,
    pub unparsed: Vec<(&'static str, String)>,
}

impl EnvConfig {
    /// Read the process environment.
    pub fn gather() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; tests pass a map instead of touching the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut unparsed = Vec::new();
        let text = |key: &str| non_blank(lookup(key));
        let path = |key: &str| text(key).map(PathBuf::from);
        let mut number = |key: &'static str| {
            let raw = text(key)?;
            raw.parse::<u32>()
                .inspect_err(|_| unparsed.push((key, raw.clone())))
                .ok()
        };

        let database_max_connections = number("GALLERY_DATABASE_MAX_CONNECTIONS");
        let default_page_size = number("GALLERY_DEFAULT_PAGE_SIZE");
        let api_page_size = number("GALLERY_API_PAGE_SIZE");

        let mut flag = |key: &'static str| {
            let raw = text(key)?;
            let parsed = parse_bool(&raw);
            if parsed.is_none() {
                unparsed.push((key, raw));
            }
            parsed
        };
        let allow_anonymous_likes = flag("GALLERY_ALLOW_ANONYMOUS_LIKES");
        let dev_mode = flag("GALLERY_DEV_MODE");

        Self {
            config_path: path("GALLERY_CONFIG"),
            database_url: text("DATABASE_URL"),
            database_url_file: path("DATABASE_URL_FILE"),
            database_password: text("DATABASE_PASSWORD"),
            database_password_file: path("DATABASE_PASSWORD_FILE"),
            database_max_connections,
            default_page_size,
            api_page_size,
            allow_anonymous_likes,
            log_filter: text("GALLERY_LOG"),
            password_pepper: text("GALLERY_PASSWORD_PEPPER"),
            dev_mode,
            unparsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn reads_known_variables() {
        let env = env(&[
            ("DATABASE_URL", "postgres://localhost/gallery"),
            ("GALLERY_API_PAGE_SIZE", "25"),
            ("GALLERY_DEV_MODE", "on"),
            ("GALLERY_LOG", "  "),
        ]);
        assert_eq!(env.database_url.as_deref(), Some("postgres://localhost/gallery"));
        assert_eq!(env.api_page_size, Some(25));
        assert_eq!(env.dev_mode, Some(true));
        assert_eq!(env.log_filter, None);
        assert!(env.unparsed.is_empty());
    }

    #[test]
    fn remembers_values_that_do_not_parse() {
        let env = env(&[
            ("GALLERY_DEFAULT_PAGE_SIZE", "twelve"),
            ("GALLERY_ALLOW_ANONYMOUS_LIKES", "sometimes"),
        ]);
        assert_eq!(env.default_page_size, None);
        assert_eq!(
            env.unparsed,
            vec![
                ("GALLERY_DEFAULT_PAGE_SIZE", "twelve".to_string()),
                ("GALLERY_ALLOW_ANONYMOUS_LIKES", "sometimes".to_string()),
            ]
        );
    }

    #[test]
    fn file_sections_are_optional() {
        let file: FileConfig = toml::from_str("[catalogue]\napi_page_size = 20\n").unwrap();
        assert_eq!(file.catalogue.api_page_size, Some(20));
        assert!(file.database.url.is_none());
    }
}
