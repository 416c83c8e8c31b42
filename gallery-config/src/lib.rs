//! Configuration for gallery deployments.
//!
//! A [`Config`] is composed from an optional `gallery.toml`, the process
//! environment (after reading `.env`) and built-in defaults, in that order of
//! precedence from lowest to highest: environment beats file, file beats
//! default. Guard rails reject settings the catalogue cannot run with and
//! collect softer findings as [`ConfigWarnings`]. The `gallery-init` binary
//! is a thin shell over this crate.

pub mod constants;
pub mod loader;
pub mod models;
pub mod telemetry;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::{AuthConfig, CatalogueConfig, Config, ConfigMetadata, DatabaseConfig, LoggingConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
