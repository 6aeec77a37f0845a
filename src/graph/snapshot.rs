// src/graph/snapshot.rs
//! JSON hand-off format between the build stage and the query stage.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::result_graph::ResultGraph;
use super::types::Matchup;
use crate::error::{BeatpathError, Result};

pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized graph. Competitors are listed in node order and matchups are
/// grouped by winner in that order, so restoring reproduces neighbour order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub version: u32,
    pub competitors: Vec<String>,
    pub matchups: Vec<MatchupEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupEntry {
    pub winner: String,
    pub loser: String,
    #[serde(flatten)]
    pub matchup: Matchup,
}

impl GraphSnapshot {
    #[must_use]
    pub fn capture(graph: &ResultGraph) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            competitors: graph.competitors().map(str::to_string).collect(),
            matchups: graph
                .edges()
                .map(|e| MatchupEntry {
                    winner: e.winner.to_string(),
                    loser: e.loser.to_string(),
                    matchup: e.matchup.clone(),
                })
                .collect(),
        }
    }

    /// Rebuilds the graph, checking the snapshot is internally consistent.
    ///
    /// # Errors
    /// Returns `UnsupportedSnapshot` for unknown versions and
    /// `CorruptSnapshot` for duplicate competitors or pairs, zero win counts,
    /// or matchups naming unlisted competitors.
    pub fn restore(self) -> Result<ResultGraph> {
        if self.version != SNAPSHOT_VERSION {
            return Err(BeatpathError::UnsupportedSnapshot {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        let mut graph = ResultGraph::default();
        for name in &self.competitors {
            if graph.contains(name) {
                return Err(corrupt(format!("competitor listed twice: {name}")));
            }
            graph.ensure_node(name);
        }

        let mut pairs = HashSet::new();
        for entry in self.matchups {
            let from = lookup(&graph, &entry.winner)?;
            let to = lookup(&graph, &entry.loser)?;
            if entry.matchup.win_count == 0 {
                return Err(corrupt(format!(
                    "matchup {} -> {} has no wins",
                    entry.winner, entry.loser
                )));
            }
            if !pairs.insert((from, to)) {
                return Err(corrupt(format!(
                    "matchup {} -> {} listed twice",
                    entry.winner, entry.loser
                )));
            }
            graph.push_edge(from, to, entry.matchup);
        }

        Ok(graph)
    }
}

/// Writes the graph to `path` as pretty JSON.
///
/// JSON has no infinity, so a graph whose margins overflowed is refused
/// before anything is written.
///
/// # Errors
/// Returns `NonFiniteMargin` for an overflowed edge, or error if
/// serialization or the write fails.
pub fn save(graph: &ResultGraph, path: &Path) -> Result<()> {
    if let Some(edge) = graph.edges().find(|e| !e.matchup.total_margin.is_finite()) {
        return Err(BeatpathError::NonFiniteMargin {
            winner: edge.winner.to_string(),
            loser: edge.loser.to_string(),
        });
    }
    let json = serde_json::to_string_pretty(&GraphSnapshot::capture(graph))
        .map_err(|e| BeatpathError::json(e, path))?;
    fs::write(path, json).map_err(|e| BeatpathError::io(e, path))?;
    tracing::debug!(path = %path.display(), "graph snapshot written");
    Ok(())
}

/// Reads a graph written by [`save`].
///
/// # Errors
/// Returns error if the file is unreadable, not a snapshot, or inconsistent.
pub fn load(path: &Path) -> Result<ResultGraph> {
    let contents = fs::read_to_string(path).map_err(|e| BeatpathError::io(e, path))?;
    let snapshot: GraphSnapshot =
        serde_json::from_str(&contents).map_err(|e| BeatpathError::json(e, path))?;
    snapshot.restore()
}

fn lookup(graph: &ResultGraph, name: &str) -> Result<usize> {
    graph
        .id_of(name)
        .ok_or_else(|| corrupt(format!("matchup names unlisted competitor: {name}")))
}

fn corrupt(message: String) -> BeatpathError {
    BeatpathError::CorruptSnapshot(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::build;
    use crate::records::ContestRecord;
    use tempfile::tempdir;

    fn sample() -> ResultGraph {
        build(&[
            ContestRecord::new("d1", "A", "B", Some(80.0), Some(70.0)),
            ContestRecord::new("d2", "C", "A", Some(61.5), Some(64.0)),
            ContestRecord::new("d3", "B", "C", Some(90.0), Some(88.0)),
            ContestRecord::new("d4", "A", "B", Some(77.0), Some(75.0)),
        ])
    }

    #[test]
    fn save_then_load_preserves_graph() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        let graph = sample();

        save(&graph, &path).unwrap();
        let restored = load(&path).unwrap();

        assert_eq!(restored, graph);
        assert_eq!(restored.edge("A", "C").unwrap().total_margin, 2.5);
        assert_eq!(restored.edge("A", "B").unwrap().win_count, 2);
    }

    #[test]
    fn snapshot_json_carries_flat_edge_attributes() {
        let value = serde_json::to_value(GraphSnapshot::capture(&sample())).unwrap();

        assert_eq!(value["version"], 1);
        assert_eq!(value["competitors"][0], "A");
        let first = &value["matchups"][0];
        assert_eq!(first["winner"], "A");
        assert_eq!(first["loser"], "B");
        assert_eq!(first["total_margin"], 12.0);
        assert_eq!(first["win_count"], 2);
        assert_eq!(first["last_date"], "d4");
    }

    #[test]
    fn restore_rejects_unknown_competitor() {
        let mut snapshot = GraphSnapshot::capture(&sample());
        snapshot.matchups[0].loser = "Nobody".into();

        let err = snapshot.restore().unwrap_err();
        assert!(matches!(err, BeatpathError::CorruptSnapshot(_)));
    }

    #[test]
    fn restore_rejects_duplicate_pairs() {
        let mut snapshot = GraphSnapshot::capture(&sample());
        let dup = snapshot.matchups[0].clone();
        snapshot.matchups.push(dup);

        assert!(matches!(
            snapshot.restore(),
            Err(BeatpathError::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn restore_rejects_future_versions() {
        let mut snapshot = GraphSnapshot::capture(&sample());
        snapshot.version = 99;

        assert!(matches!(
            snapshot.restore(),
            Err(BeatpathError::UnsupportedSnapshot { found: 99, .. })
        ));
    }

    #[test]
    fn save_refuses_overflowed_margin() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        let graph = build(&[
            ContestRecord::new("d1", "A", "B", Some(1e308), Some(1.0)),
            ContestRecord::new("d2", "A", "B", Some(1e308), Some(1.0)),
        ]);

        let err = save(&graph, &path).unwrap_err();
        assert!(matches!(
            err,
            BeatpathError::NonFiniteMargin { ref winner, ref loser } if winner == "A" && loser == "B"
        ));
        assert!(!path.exists());
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(load(&path), Err(BeatpathError::Json { .. })));
    }
}
