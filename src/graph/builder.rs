// src/graph/builder.rs
//! Graph construction: folds contest records into aggregated edges.
//!
//! One pass over the records, in input order. Each usable record adds a win
//! for its winner over its loser; repeated pairings collapse into a single
//! edge whose margin and count accumulate and whose date is overwritten by
//! the most recently processed record. Unusable records are counted and
//! skipped, never reported as errors.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::result_graph::ResultGraph;
use super::types::{Matchup, NodeId};
use crate::records::{ContestRecord, RawScore};

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;

/// Which scores count as "present".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ScorePresence {
    /// Historical behavior: a numeric zero is treated like a missing score.
    #[default]
    Truthy,
    /// Only absent, `null` or empty scores are missing.
    Present,
}

/// What to do with a contest whose two scores are equal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Historical behavior: the away competitor is recorded as the winner.
    #[default]
    AwayWins,
    /// Drop the contest.
    Skip,
}

/// Record-interpretation rules for a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildPolicy {
    pub scores: ScorePresence,
    pub ties: TiePolicy,
}

/// Why a record did not contribute an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingScore,
    ZeroScore,
    UnparseableScore,
    Tie,
}

impl SkipReason {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MissingScore => "missing score",
            Self::ZeroScore => "zero score",
            Self::UnparseableScore => "unparseable score",
            Self::Tie => "tie",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tally of a build pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub records: usize,
    pub applied: usize,
    pub missing_score: usize,
    pub zero_score: usize,
    pub unparseable_score: usize,
    pub tie: usize,
}

impl BuildReport {
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.missing_score + self.zero_score + self.unparseable_score + self.tie
    }

    fn record_skip(&mut self, reason: SkipReason) {
        let counter = match reason {
            SkipReason::MissingScore => &mut self.missing_score,
            SkipReason::ZeroScore => &mut self.zero_score,
            SkipReason::UnparseableScore => &mut self.unparseable_score,
            SkipReason::Tie => &mut self.tie,
        };
        *counter += 1;
    }
}

/// What happened to a single pushed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The record added a win; `created` is true when the edge is new.
    Applied { created: bool },
    Skipped(SkipReason),
}

/// Incremental builder behind [`build`] and [`build_with`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    policy: BuildPolicy,
    graph: ResultGraph,
    /// (winner, loser) -> slot in the winner's outgoing list.
    slots: HashMap<(NodeId, NodeId), usize>,
    report: BuildReport,
}

impl GraphBuilder {
    #[must_use]
    pub fn new(policy: BuildPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Folds one record into the graph.
    pub fn push(&mut self, record: &ContestRecord) -> Outcome {
        self.report.records += 1;
        match decide(record, self.policy) {
            Ok(decision) => {
                let created = self.upsert(&decision, &record.date);
                self.report.applied += 1;
                Outcome::Applied { created }
            }
            Err(reason) => {
                tracing::debug!(
                    date = %record.date,
                    home = %record.home,
                    away = %record.away,
                    %reason,
                    "skipping contest record"
                );
                self.report.record_skip(reason);
                Outcome::Skipped(reason)
            }
        }
    }

    pub fn extend<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a ContestRecord>,
    {
        for record in records {
            self.push(record);
        }
    }

    #[must_use]
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Seals the graph. Nothing mutates it after this point.
    #[must_use]
    pub fn finish(self) -> (ResultGraph, BuildReport) {
        tracing::info!(
            records = self.report.records,
            applied = self.report.applied,
            skipped = self.report.skipped(),
            competitors = self.graph.node_count(),
            matchups = self.graph.edge_count(),
            "graph built"
        );
        (self.graph, self.report)
    }

    fn upsert(&mut self, decision: &Decision<'_>, date: &str) -> bool {
        let from = self.graph.ensure_node(decision.winner);
        let to = self.graph.ensure_node(decision.loser);

        match self.slots.entry((from, to)) {
            Entry::Occupied(slot) => {
                if let Some(matchup) = self.graph.edge_mut(from, *slot.get()) {
                    matchup.absorb(decision.margin, date);
                }
                false
            }
            Entry::Vacant(slot) => {
                let index = self
                    .graph
                    .push_edge(from, to, Matchup::first(decision.margin, date));
                slot.insert(index);
                true
            }
        }
    }
}

/// Builds a graph with the historical record rules.
#[must_use]
pub fn build(records: &[ContestRecord]) -> ResultGraph {
    build_with(records, BuildPolicy::default()).0
}

/// Builds a graph under an explicit policy and reports what was skipped.
#[must_use]
pub fn build_with(records: &[ContestRecord], policy: BuildPolicy) -> (ResultGraph, BuildReport) {
    let mut builder = GraphBuilder::new(policy);
    builder.extend(records);
    builder.finish()
}

struct Decision<'r> {
    winner: &'r str,
    loser: &'r str,
    margin: f64,
}

fn decide(record: &ContestRecord, policy: BuildPolicy) -> Result<Decision<'_>, SkipReason> {
    let home_raw = present(record.home_score.as_ref(), policy.scores)?;
    let away_raw = present(record.away_score.as_ref(), policy.scores)?;

    let home = home_raw.value().ok_or(SkipReason::UnparseableScore)?;
    let away = away_raw.value().ok_or(SkipReason::UnparseableScore)?;
    // Finite scores can still differ by more than f64 holds.
    if !(home - away).is_finite() {
        return Err(SkipReason::UnparseableScore);
    }

    if home > away {
        return Ok(Decision {
            winner: &record.home,
            loser: &record.away,
            margin: home - away,
        });
    }
    // Equal scores fall through to the away side unless ties are skipped.
    if home >= away && policy.ties == TiePolicy::Skip {
        return Err(SkipReason::Tie);
    }
    Ok(Decision {
        winner: &record.away,
        loser: &record.home,
        margin: away - home,
    })
}

fn present(score: Option<&RawScore>, rule: ScorePresence) -> Result<&RawScore, SkipReason> {
    let raw = score.ok_or(SkipReason::MissingScore)?;
    if raw.is_empty() {
        return Err(SkipReason::MissingScore);
    }
    if rule == ScorePresence::Truthy && raw.is_falsy() {
        return Err(SkipReason::ZeroScore);
    }
    Ok(raw)
}
