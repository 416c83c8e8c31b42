pub mod db_url;
pub mod error;

use std::{fs, path::PathBuf};

use tracing::debug;

use crate::constants::{
    DEFAULT_CONFIG_LOCATIONS, DEFAULT_LOG_FILTER, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_PASSWORD_PEPPER,
};
use crate::models::{
    AuthConfig, CatalogueConfig, Config, ConfigMetadata, DatabaseConfig, LoggingConfig,
    sources::{EnvConfig, FileConfig},
};
use crate::validation::{self, ConfigWarnings};
use error::ConfigLoadError;

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

/// A loaded configuration plus the non-fatal findings from validation.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Read `.env` (a missing file is fine), then the process environment,
    /// then compose.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        }
        .or_else(|err| match err {
            dotenvy::Error::Io(_) => Ok(false),
            _ => Err(err),
        })?;

        self.load_with_env(EnvConfig::gather(), env_file_loaded)
    }

    /// Compose from an already gathered environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        if let Some((key, value)) = env.unparsed.first() {
            return Err(ConfigLoadError::InvalidEnvValue {
                key: *key,
                value: value.clone(),
            });
        }

        let (file_config, config_path) = self.load_file_config(&env)?;
        let mut warnings = ConfigWarnings::default();
        if config_path.is_none() {
            warnings.push_with_hint(
                "No gallery.toml found; using environment variables and defaults",
                "Point GALLERY_CONFIG at a configuration file to pin settings",
            );
        }

        let config = compose(
            file_config.unwrap_or_default(),
            env,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )?;

        warnings.extend(validation::apply_guard_rails(&config)?);
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        // An explicit path (option or GALLERY_CONFIG) must exist; default
        // locations are only probed.
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
            {
                Some(path) => path,
                None => return Ok((None, None)),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
            path: path.clone(),
            source,
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "loaded configuration file");
        Ok((Some(file_config), Some(path)))
    }
}

fn compose(
    file: FileConfig,
    env: EnvConfig,
    metadata: ConfigMetadata,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        database: file_database,
        catalogue: file_catalogue,
        logging: file_logging,
        auth: file_auth,
        dev_mode: file_dev_mode,
    } = file;

    let database = DatabaseConfig {
        url: db_url::resolve_database_url(&env, &file_database)?,
        max_connections: env
            .database_max_connections
            .or(file_database.max_connections)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS),
    };

    let defaults = CatalogueConfig::default();
    let catalogue = CatalogueConfig {
        default_page_size: env
            .default_page_size
            .or(file_catalogue.default_page_size)
            .unwrap_or(defaults.default_page_size),
        api_page_size: env
            .api_page_size
            .or(file_catalogue.api_page_size)
            .unwrap_or(defaults.api_page_size),
        allow_anonymous_likes: env
            .allow_anonymous_likes
            .or(file_catalogue.allow_anonymous_likes)
            .unwrap_or(defaults.allow_anonymous_likes),
    };

    let logging = LoggingConfig {
        filter: env
            .log_filter
            .or(file_logging.filter)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
    };

    let auth = AuthConfig {
        password_pepper: env
            .password_pepper
            .or(file_auth.password_pepper)
            .unwrap_or_else(|| DEFAULT_PASSWORD_PEPPER.to_string()),
    };

    Ok(Config {
        database,
        catalogue,
        logging,
        auth,
        dev_mode: env.dev_mode.or(file_dev_mode).unwrap_or(false),
        metadata,
    })
}
