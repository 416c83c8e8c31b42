#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;

use gallery_config::models::sources::EnvConfig;
use tempfile::NamedTempFile;

pub const STRONG_PEPPER: &str = "0123456789abcdef0123456789abcdef";

/// An environment built from literal pairs, isolated from the process.
pub fn env(pairs: &[(&str, &str)]) -> EnvConfig {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    EnvConfig::from_lookup(|key| map.get(key).cloned())
}

/// A TOML file with `contents`, removed when dropped.
pub fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}
