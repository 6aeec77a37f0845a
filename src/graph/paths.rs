// src/graph/paths.rs
//! Exhaustive enumeration of simple win chains between two competitors.
//!
//! A chain is a simple directed path `source -> ... -> target` in the result
//! graph: every hop is a recorded win and no competitor appears twice. The
//! search is a depth-first walk driven by an explicit stack of neighbour
//! iterators, so chain length is bounded by `max_length` and not by the
//! call stack. Neighbours are taken in edge-creation order, which fixes the
//! order in which chains are discovered.

use std::collections::BTreeMap;
use std::slice;

use rayon::prelude::*;
use serde::Serialize;

use super::result_graph::ResultGraph;
use super::types::{NodeId, OutEdge};
use crate::error::{BeatpathError, Result};

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;

/// Chains keyed by their edge count, ascending. Only observed lengths are
/// present; within a length, chains are in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathGroups {
    groups: BTreeMap<usize, Vec<Vec<String>>>,
}

impl PathGroups {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of chains across all lengths.
    #[must_use]
    pub fn total_paths(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Chains with exactly `length` edges.
    #[must_use]
    pub fn get(&self, length: usize) -> Option<&[Vec<String>]> {
        self.groups.get(&length).map(Vec::as_slice)
    }

    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Vec<String>])> {
        self.groups.iter().map(|(len, paths)| (*len, paths.as_slice()))
    }

    fn insert(&mut self, path: Vec<String>) {
        let length = path.len().saturating_sub(1);
        self.groups.entry(length).or_default().push(path);
    }
}

/// One source/target/cutoff triple for [`PathFinder::find_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathQuery<'q> {
    pub source: &'q str,
    pub target: &'q str,
    pub max_length: usize,
}

/// Read-only path queries over a built graph.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g ResultGraph,
}

impl<'g> PathFinder<'g> {
    #[must_use]
    pub fn new(graph: &'g ResultGraph) -> Self {
        Self { graph }
    }

    /// All simple chains from `source` to `target` with at most
    /// `max_length` edges.
    ///
    /// # Errors
    /// Returns `NodeNotFound` if either endpoint is not in the graph. The
    /// source is checked first; no search work happens on failure.
    pub fn find(&self, source: &str, target: &str, max_length: usize) -> Result<PathGroups> {
        let from = self.require(source)?;
        let to = self.require(target)?;

        let groups = search(self.graph, from, to, max_length);
        tracing::debug!(
            from = source,
            to = target,
            max_length,
            paths = groups.total_paths(),
            "path search finished"
        );
        Ok(groups)
    }

    /// Runs independent queries in parallel. Results come back in query
    /// order; each search owns its own stack and visited set.
    #[must_use]
    pub fn find_all(&self, queries: &[PathQuery<'_>]) -> Vec<Result<PathGroups>> {
        queries
            .par_iter()
            .map(|q| self.find(q.source, q.target, q.max_length))
            .collect()
    }

    fn require(&self, name: &str) -> Result<NodeId> {
        self.graph
            .id_of(name)
            .ok_or_else(|| BeatpathError::NodeNotFound {
                name: name.to_string(),
            })
    }
}

/// Shorthand for `PathFinder::new(graph).find(..)`.
///
/// # Errors
/// Returns `NodeNotFound` if either endpoint is not in the graph.
pub fn find_paths(
    graph: &ResultGraph,
    source: &str,
    target: &str,
    max_length: usize,
) -> Result<PathGroups> {
    PathFinder::new(graph).find(source, target, max_length)
}

// Ids come from the graph itself, so `on_path` indexing stays in bounds.
#[allow(clippy::indexing_slicing)]
fn search(graph: &ResultGraph, source: NodeId, target: NodeId, max_length: usize) -> PathGroups {
    let mut groups = PathGroups::default();
    if max_length == 0 {
        return groups;
    }

    let mut on_path = vec![false; graph.node_count()];
    let mut path: Vec<NodeId> = vec![source];
    let mut stack: Vec<slice::Iter<'_, OutEdge>> = vec![graph.successors(source).iter()];
    on_path[source] = true;

    // Invariant: path.len() <= max_length, so stepping to a neighbour yields
    // a chain of path.len() edges, still within the cutoff.
    while let Some(frontier) = stack.last_mut() {
        let Some(edge) = frontier.next() else {
            stack.pop();
            if let Some(done) = path.pop() {
                on_path[done] = false;
            }
            continue;
        };

        let next = edge.target;
        if on_path[next] {
            continue;
        }
        if next == target {
            groups.insert(to_names(graph, &path, next));
            continue;
        }
        if path.len() < max_length {
            on_path[next] = true;
            path.push(next);
            stack.push(graph.successors(next).iter());
        }
    }

    groups
}

fn to_names(graph: &ResultGraph, path: &[NodeId], last: NodeId) -> Vec<String> {
    path.iter()
        .chain(std::iter::once(&last))
        .map(|&id| graph.name_of(id).to_string())
        .collect()
}
