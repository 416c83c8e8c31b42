/// Placeholder pepper used when none is configured. Accepted only in dev mode.
pub const DEFAULT_PASSWORD_PEPPER: &str = "gallery-development-pepper-change-me";

/// Minimum pepper length outside dev mode.
pub const MIN_PEPPER_LENGTH: usize = 32;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Files probed, in order, when no config path is given.
pub const DEFAULT_CONFIG_LOCATIONS: &[&str] = &["gallery.toml", "config/gallery.toml"];
