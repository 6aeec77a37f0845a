// src/graph/stats.rs
//! Summary counts over a built graph.

use serde::Serialize;

use super::result_graph::ResultGraph;

/// A competitor together with a win or loss total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub competitor: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub competitors: usize,
    pub matchups: usize,
    /// Contests behind all edges (sum of win counts).
    pub contests: u64,
    pub most_wins: Option<Tally>,
    pub most_losses: Option<Tally>,
}

impl GraphStats {
    /// Counts are contests, not edges. Equal totals resolve to the competitor
    /// that entered the graph first.
    #[must_use]
    pub fn compute(graph: &ResultGraph) -> Self {
        let mut wins = vec![0_u64; graph.node_count()];
        let mut losses = vec![0_u64; graph.node_count()];

        for (id, win_total) in wins.iter_mut().enumerate() {
            for edge in graph.successors(id) {
                let n = u64::from(edge.matchup.win_count);
                *win_total += n;
                if let Some(slot) = losses.get_mut(edge.target) {
                    *slot += n;
                }
            }
        }

        Self {
            competitors: graph.node_count(),
            matchups: graph.edge_count(),
            contests: wins.iter().sum(),
            most_wins: leader(graph, &wins),
            most_losses: leader(graph, &losses),
        }
    }
}

fn leader(graph: &ResultGraph, totals: &[u64]) -> Option<Tally> {
    let mut best: Option<(usize, u64)> = None;
    for (id, &count) in totals.iter().enumerate() {
        if count > best.map_or(0, |(_, c)| c) {
            best = Some((id, count));
        }
    }
    best.map(|(id, count)| Tally {
        competitor: graph.name_of(id).to_string(),
        count,
    })
}
