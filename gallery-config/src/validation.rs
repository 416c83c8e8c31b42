use thiserror::Error;
use url::Url;

use crate::constants::MIN_PEPPER_LENGTH;
use crate::models::{AuthConfig, CatalogueConfig, Config, DatabaseConfig};

/// Settings the catalogue refuses to start with.
#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("{field} must be at least 1")]
    ZeroSetting { field: &'static str },
    #[error("database URL does not parse")]
    UnparseableDatabaseUrl {
        #[source]
        source: url::ParseError,
    },
    #[error("database URL scheme '{scheme}' is not supported; use postgres:// or postgresql://")]
    UnsupportedDatabaseScheme { scheme: String },
    #[error("password pepper {reason}")]
    WeakPepper { reason: String },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(&mut self, message: S, hint: H) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(config: &Config) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    validate_catalogue(&config.catalogue)?;
    validate_database(&config.database, &mut warnings)?;
    enforce_pepper(&config.auth, config.dev_mode, &mut warnings)?;

    Ok(warnings)
}

fn validate_catalogue(catalogue: &CatalogueConfig) -> Result<(), ConfigGuardRailError> {
    if catalogue.default_page_size == 0 {
        return Err(ConfigGuardRailError::ZeroSetting {
            field: "catalogue.default_page_size",
        });
    }
    if catalogue.api_page_size == 0 {
        return Err(ConfigGuardRailError::ZeroSetting {
            field: "catalogue.api_page_size",
        });
    }
    Ok(())
}

fn validate_database(
    database: &DatabaseConfig,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    if database.max_connections == 0 {
        return Err(ConfigGuardRailError::ZeroSetting {
            field: "database.max_connections",
        });
    }

    let Some(raw) = database.url.as_deref() else {
        warnings.push_with_hint(
            "No database URL configured; only the in-memory store is available",
            "Set DATABASE_URL or database.url in gallery.toml",
        );
        return Ok(());
    };

    let url = Url::parse(raw)
        .map_err(|source| ConfigGuardRailError::UnparseableDatabaseUrl { source })?;
    match url.scheme() {
        "postgres" | "postgresql" => Ok(()),
        other => Err(ConfigGuardRailError::UnsupportedDatabaseScheme {
            scheme: other.to_string(),
        }),
    }
}

fn enforce_pepper(
    auth: &AuthConfig,
    dev_mode: bool,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    if dev_mode {
        if auth.is_default_pepper() {
            warnings.push_with_hint(
                "Using the placeholder password pepper",
                "Set GALLERY_PASSWORD_PEPPER before leaving dev mode",
            );
        }
        return Ok(());
    }

    if auth.is_default_pepper() {
        return Err(ConfigGuardRailError::WeakPepper {
            reason: "uses the default placeholder value".into(),
        });
    }
    if auth.password_pepper.len() < MIN_PEPPER_LENGTH {
        return Err(ConfigGuardRailError::WeakPepper {
            reason: format!("must be at least {MIN_PEPPER_LENGTH} characters"),
        });
    }
    Ok(())
}
