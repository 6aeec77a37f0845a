// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BeatpathError {
    #[error("Competitor not found in graph: {name}")]
    NodeNotFound { name: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {source} (path: {path})")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Config error: {source} (path: {path})")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Corrupt graph snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("Matchup {winner} -> {loser} has a total margin too large to store")]
    NonFiniteMargin { winner: String, loser: String },

    #[error("Unsupported graph snapshot version {found} (expected {expected})")]
    UnsupportedSnapshot { found: u32, expected: u32 },
}

pub type Result<T> = std::result::Result<T, BeatpathError>;

impl BeatpathError {
    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    pub(crate) fn json(source: serde_json::Error, path: impl Into<PathBuf>) -> Self {
        Self::Json {
            source,
            path: path.into(),
        }
    }

    /// True for the one failure a path query can produce on valid input.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound { .. })
    }
}
