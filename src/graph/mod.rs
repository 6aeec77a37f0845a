// src/graph/mod.rs
//! The "who beat whom" graph: construction, persistence and path queries.

pub mod builder;
pub mod paths;
pub mod result_graph;
pub mod snapshot;
pub mod stats;
pub mod types;

pub use builder::{
    build, build_with, BuildPolicy, BuildReport, GraphBuilder, Outcome, ScorePresence,
    SkipReason, TiePolicy,
};
pub use paths::{find_paths, PathFinder, PathGroups, PathQuery};
pub use result_graph::ResultGraph;
pub use snapshot::GraphSnapshot;
pub use stats::{GraphStats, Tally};
pub use types::{EdgeView, Matchup};
