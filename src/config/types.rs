use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::graph::BuildPolicy;

/// Contents of `beatpath.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub build: BuildPolicy,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Longest chain, in wins, a path query enumerates.
    #[serde(default = "default_cutoff")]
    pub cutoff: usize,
    /// Snapshot written by `build` and read by `paths` / `stats`.
    #[serde(default = "default_graph_path")]
    pub graph: PathBuf,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            cutoff: default_cutoff(),
            graph: default_graph_path(),
        }
    }
}

const fn default_cutoff() -> usize { 4 }
fn default_graph_path() -> PathBuf { PathBuf::from("beatpath_graph.json") }
