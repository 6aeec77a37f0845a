// src/graph/types.rs
//! Edge attributes and borrowed views over the result graph.

use serde::{Deserialize, Serialize};

/// Dense index of a competitor inside one graph.
pub type NodeId = usize;

/// Aggregated outcome of every contest one competitor won against another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    /// Sum of the point differentials of all aggregated contests.
    pub total_margin: f64,
    /// Number of contests aggregated into this edge. Never zero.
    pub win_count: u32,
    /// Date of the last contest processed for this pair, in input order.
    pub last_date: String,
}

impl Matchup {
    pub(crate) fn first(margin: f64, date: &str) -> Self {
        Self {
            total_margin: margin,
            win_count: 1,
            last_date: date.to_string(),
        }
    }

    pub(crate) fn absorb(&mut self, margin: f64, date: &str) {
        self.total_margin += margin;
        self.win_count += 1;
        self.last_date.clear();
        self.last_date.push_str(date);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OutEdge {
    pub(crate) target: NodeId,
    pub(crate) matchup: Matchup,
}

/// A directed edge seen from the outside: `winner` beat `loser`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeView<'g> {
    pub winner: &'g str,
    pub loser: &'g str,
    pub matchup: &'g Matchup,
}
