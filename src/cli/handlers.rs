// src/cli/handlers.rs
//! Build, path and stats command handlers.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::args::{BuildArgs, PathsArgs, StatsArgs};
use crate::config::Config;
use crate::exit::BeatpathExit;
use crate::graph::{
    self, snapshot, BuildPolicy, BuildReport, GraphStats, PathFinder, PathGroups, PathQuery,
};
use crate::records;
use crate::reporting;

#[derive(Serialize)]
struct BuildOutput<'a> {
    output: &'a std::path::Path,
    competitors: usize,
    matchups: usize,
    report: &'a BuildReport,
}

#[derive(Serialize)]
struct PathsOutput<'a> {
    from: &'a str,
    to: &'a str,
    cutoff: usize,
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    paths: Option<PathGroups>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Handles `build`: records file -> graph snapshot.
///
/// # Errors
/// Returns error if the records cannot be read or the snapshot cannot be written.
pub fn handle_build(config: &Config, args: &BuildArgs) -> Result<BeatpathExit> {
    let policy = BuildPolicy {
        scores: args.scores.unwrap_or(config.build.scores),
        ties: args.ties.unwrap_or(config.build.ties),
    };
    let output = args.output.as_ref().unwrap_or(&config.query.graph);

    let records = records::load(&args.records)?;
    let (graph, report) = graph::build_with(&records, policy);
    snapshot::save(&graph, output)
        .with_context(|| format!("saving graph built from {}", args.records.display()))?;

    if args.json {
        reporting::print_json(&BuildOutput {
            output,
            competitors: graph.node_count(),
            matchups: graph.edge_count(),
            report: &report,
        })?;
    } else {
        print!("{}", reporting::build_report(&report, &graph, output));
    }
    Ok(BeatpathExit::Success)
}

/// Handles `paths`: every chain of wins from `from` to each target.
///
/// Unknown competitors are reported per target and turn the exit code into
/// `NotFound`; the remaining targets are still answered.
///
/// # Errors
/// Returns error if the graph snapshot cannot be loaded.
pub fn handle_paths(config: &Config, args: &PathsArgs) -> Result<BeatpathExit> {
    let graph_path = args.graph.as_ref().unwrap_or(&config.query.graph);
    let cutoff = args.cutoff.unwrap_or(config.query.cutoff);
    let graph = snapshot::load(graph_path)?;

    let queries: Vec<PathQuery<'_>> = args
        .to
        .iter()
        .map(|target| PathQuery {
            source: &args.from,
            target,
            max_length: cutoff,
        })
        .collect();
    let results = PathFinder::new(&graph).find_all(&queries);

    let mut exit = BeatpathExit::Success;
    let mut outputs = Vec::with_capacity(results.len());
    for (query, result) in queries.iter().zip(results) {
        match result {
            Ok(groups) => outputs.push(PathsOutput {
                from: query.source,
                to: query.target,
                cutoff,
                total: groups.total_paths(),
                paths: Some(groups),
                error: None,
            }),
            Err(e) if e.is_not_found() => {
                exit = BeatpathExit::NotFound;
                outputs.push(PathsOutput {
                    from: query.source,
                    to: query.target,
                    cutoff,
                    total: 0,
                    paths: None,
                    error: Some(e.to_string()),
                });
            }
            Err(e) => return Err(e.into()),
        }
    }

    if args.json {
        reporting::print_json(&outputs)?;
        return Ok(exit);
    }

    for out in &outputs {
        match (&out.paths, &out.error) {
            (Some(groups), _) => {
                print!(
                    "{}",
                    reporting::paths_report(&graph, out.from, out.to, cutoff, groups)
                );
            }
            (None, Some(message)) => eprintln!("{} {message}", "Error:".red()),
            (None, None) => {}
        }
    }
    Ok(exit)
}

/// Handles `stats`.
///
/// # Errors
/// Returns error if the graph snapshot cannot be loaded.
pub fn handle_stats(config: &Config, args: &StatsArgs) -> Result<BeatpathExit> {
    let graph_path = args.graph.as_ref().unwrap_or(&config.query.graph);
    let graph = snapshot::load(graph_path)?;
    let stats = GraphStats::compute(&graph);

    if args.json {
        reporting::print_json(&stats)?;
    } else {
        print!("{}", reporting::stats_report(&stats));
    }
    Ok(BeatpathExit::Success)
}
