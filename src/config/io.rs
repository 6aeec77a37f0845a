// src/config/io.rs
use std::fs;
use std::path::Path;

use super::types::Config;
use crate::error::{BeatpathError, Result};

pub const CONFIG_FILE: &str = "beatpath.toml";

/// Parses TOML content into a config.
///
/// # Errors
/// Returns the TOML error for malformed content or unknown enum values.
pub fn parse(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Reads and parses the config file at `path`.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn read(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| BeatpathError::io(e, path))?;
    let config = parse(&content).map_err(|source| BeatpathError::Config {
        source,
        path: path.to_path_buf(),
    })?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}
