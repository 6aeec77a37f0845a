// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, QueryConfig};

use crate::error::Result;
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `beatpath.toml` from `dir`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_in(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::new());
        }
        io::read(&path)
    }

    /// Loads an explicitly named config file. A missing file is an error.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        io::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{ScorePresence, TiePolicy};
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn defaults_preserve_historical_rules() {
        let config = Config::new();
        assert_eq!(config.build.scores, ScorePresence::Truthy);
        assert_eq!(config.build.ties, TiePolicy::AwayWins);
        assert_eq!(config.query.cutoff, 4);
        assert_eq!(config.query.graph, PathBuf::from("beatpath_graph.json"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = io::parse("[build]\nties = \"skip\"\n").unwrap();
        assert_eq!(config.build.ties, TiePolicy::Skip);
        assert_eq!(config.build.scores, ScorePresence::Truthy);
        assert_eq!(config.query.cutoff, 4);
    }

    #[test]
    fn full_file_round_trips_every_key() {
        let content = "[build]\n\
                       scores = \"present\"\n\
                       ties = \"away_wins\"\n\
                       [query]\n\
                       cutoff = 6\n\
                       graph = \"season.json\"\n";
        let config = io::parse(content).unwrap();
        assert_eq!(config.build.scores, ScorePresence::Present);
        assert_eq!(config.query.cutoff, 6);
        assert_eq!(config.query.graph, PathBuf::from("season.json"));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(io::parse("[build]\nties = \"home_wins\"\n").is_err());
    }

    #[test]
    fn load_in_without_file_uses_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::load_in(dir.path()).unwrap(), Config::new());
    }

    #[test]
    fn load_in_reports_bad_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[query]\ncutoff = \"many\"\n").unwrap();
        let err = Config::load_in(dir.path()).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
