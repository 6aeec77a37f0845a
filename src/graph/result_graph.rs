// src/graph/result_graph.rs
//! The built "who beat whom" graph and its read interface.

use std::collections::HashMap;

use super::types::{EdgeView, Matchup, NodeId, OutEdge};

/// Directed graph of competitors, one aggregated edge per (winner, loser).
///
/// Competitors keep insertion order and each competitor's outgoing edges keep
/// creation order, which makes every traversal over the graph reproducible.
/// Once handed out by the builder (or a snapshot load) the graph is never
/// mutated again.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultGraph {
    pub(crate) names: Vec<String>,
    pub(crate) index: HashMap<String, NodeId>,
    pub(crate) outgoing: Vec<Vec<OutEdge>>,
}

impl ResultGraph {
    /// Number of competitors.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of distinct (winner, loser) edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Competitor names in insertion order.
    pub fn competitors(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Edges leaving `name`, in creation order. Empty for unknown names.
    pub fn outgoing<'g>(&'g self, name: &str) -> impl Iterator<Item = EdgeView<'g>> + 'g {
        self.id_of(name)
            .into_iter()
            .flat_map(move |id| self.views_from(id))
    }

    /// Every edge, grouped by winner in competitor order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> {
        (0..self.names.len()).flat_map(move |id| self.views_from(id))
    }

    /// The aggregated edge `winner -> loser`, if they ever met that way.
    #[must_use]
    pub fn edge(&self, winner: &str, loser: &str) -> Option<&Matchup> {
        let from = self.id_of(winner)?;
        let to = self.id_of(loser)?;
        self.successors(from)
            .iter()
            .find(|e| e.target == to)
            .map(|e| &e.matchup)
    }

    pub(crate) fn id_of(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub(crate) fn name_of(&self, id: NodeId) -> &str {
        self.names.get(id).map_or("", String::as_str)
    }

    pub(crate) fn successors(&self, id: NodeId) -> &[OutEdge] {
        self.outgoing.get(id).map_or(&[], Vec::as_slice)
    }

    /// Returns the id for `name`, creating the node on first sight.
    pub(crate) fn ensure_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    /// Appends a new edge and returns its slot in `from`'s edge list.
    pub(crate) fn push_edge(&mut self, from: NodeId, to: NodeId, matchup: Matchup) -> usize {
        let list = &mut self.outgoing[from];
        list.push(OutEdge {
            target: to,
            matchup,
        });
        list.len() - 1
    }

    pub(crate) fn edge_mut(&mut self, from: NodeId, slot: usize) -> Option<&mut Matchup> {
        self.outgoing
            .get_mut(from)
            .and_then(|list| list.get_mut(slot))
            .map(|e| &mut e.matchup)
    }

    fn views_from(&self, id: NodeId) -> impl Iterator<Item = EdgeView<'_>> {
        let winner = self.name_of(id);
        self.successors(id).iter().map(move |e| EdgeView {
            winner,
            loser: self.name_of(e.target),
            matchup: &e.matchup,
        })
    }
}
