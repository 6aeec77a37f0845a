// src/reporting.rs
//! Console output for build summaries, statistics and path listings.
//!
//! Every `*_report` function returns plain text so callers and tests can
//! inspect it; `print_json` writes machine-readable output to stdout.

use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;
use std::path::Path;

use crate::graph::{BuildReport, GraphStats, PathGroups, ResultGraph};

const RULE_WIDTH: usize = 40;

/// Renders one chain hop by hop:
/// `A beat B by 5 on 2024/01/02 → B beat C by 3 on 2024/01/09`.
///
/// Hops missing from `graph` are rendered without attributes.
#[must_use]
pub fn format_path(graph: &ResultGraph, path: &[String]) -> String {
    path.windows(2)
        .filter_map(|hop| match hop {
            [winner, loser] => Some(format_hop(graph, winner, loser)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

fn format_hop(graph: &ResultGraph, winner: &str, loser: &str) -> String {
    match graph.edge(winner, loser) {
        Some(m) => format!(
            "{winner} beat {loser} by {} on {}",
            m.total_margin, m.last_date
        ),
        None => format!("{winner} beat {loser}"),
    }
}

/// Grouped path listing, shortest chains first.
#[must_use]
pub fn paths_report(
    graph: &ResultGraph,
    source: &str,
    target: &str,
    cutoff: usize,
    groups: &PathGroups,
) -> String {
    let mut out = String::new();
    if groups.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            format!("No paths found from {source} to {target} within {cutoff} steps").yellow()
        );
        return out;
    }

    let _ = writeln!(
        out,
        "\n{}",
        format!(
            "Found {} paths from {source} to {target}",
            groups.total_paths()
        )
        .green()
        .bold()
    );
    let _ = writeln!(out, "Maximum path length: {cutoff}");

    for (length, paths) in groups.iter() {
        let _ = writeln!(
            out,
            "\n{}",
            format!("Paths of length {length} ({} paths):", paths.len()).bold()
        );
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH).dimmed());
        for path in paths {
            let _ = writeln!(out, "{}\n", format_path(graph, path));
        }
    }
    out
}

#[must_use]
pub fn build_report(report: &BuildReport, graph: &ResultGraph, output: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} of {} records applied",
        "✓".green().bold(),
        report.applied,
        report.records
    );
    if report.skipped() > 0 {
        let _ = writeln!(
            out,
            "  {} skipped (missing {}, zero {}, unparseable {}, ties {})",
            report.skipped().to_string().yellow(),
            report.missing_score,
            report.zero_score,
            report.unparseable_score,
            report.tie
        );
    }
    let _ = writeln!(
        out,
        "  {} competitors, {} matchups",
        graph.node_count(),
        graph.edge_count()
    );
    let _ = writeln!(out, "  Saved graph to {}", output.display().to_string().cyan());
    out
}

#[must_use]
pub fn stats_report(stats: &GraphStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Number of competitors (nodes): {}", stats.competitors);
    let _ = writeln!(out, "Number of contests: {}", stats.contests);
    let _ = writeln!(out, "Number of matchups (edges): {}", stats.matchups);
    let _ = writeln!(out, "\n{}", "Statistics:".bold());
    match &stats.most_wins {
        Some(t) => {
            let _ = writeln!(out, "Most wins: {} ({} wins)", t.competitor.cyan(), t.count);
        }
        None => {
            let _ = writeln!(out, "Most wins: {}", "n/a".dimmed());
        }
    }
    match &stats.most_losses {
        Some(t) => {
            let _ = writeln!(out, "Most losses: {} ({} losses)", t.competitor.cyan(), t.count);
        }
        None => {
            let _ = writeln!(out, "Most losses: {}", "n/a".dimmed());
        }
    }
    out
}

/// Prints any serializable report as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build, find_paths};
    use crate::records::ContestRecord;

    fn plain() {
        colored::control::set_override(false);
    }

    fn season() -> ResultGraph {
        build(&[
            ContestRecord::new("2024/01/02", "A", "B", Some(70.0), Some(65.0)),
            ContestRecord::new("2024/01/09", "B", "C", Some(80.0), Some(77.0)),
            ContestRecord::new("2024/01/16", "A", "C", Some(60.0), Some(59.0)),
        ])
    }

    #[test]
    fn format_path_joins_hops() {
        let graph = season();
        let path = vec!["A".to_string(), "B".to_string(), "C".to_string()];

        assert_eq!(
            format_path(&graph, &path),
            "A beat B by 5 on 2024/01/02 → B beat C by 3 on 2024/01/09"
        );
    }

    #[test]
    fn paths_report_lists_lengths_in_order() {
        plain();
        let graph = season();
        let groups = find_paths(&graph, "A", "C", 4).unwrap();
        let text = paths_report(&graph, "A", "C", 4, &groups);

        assert!(text.contains("Found 2 paths from A to C"));
        assert!(text.contains("Maximum path length: 4"));
        let one = text.find("Paths of length 1 (1 paths):").unwrap();
        let two = text.find("Paths of length 2 (1 paths):").unwrap();
        assert!(one < two);
        assert!(text.contains("A beat C by 1 on 2024/01/16"));
    }

    #[test]
    fn paths_report_explains_empty_result() {
        plain();
        let graph = season();
        let groups = find_paths(&graph, "C", "A", 3).unwrap();

        assert_eq!(
            paths_report(&graph, "C", "A", 3, &groups).trim(),
            "No paths found from C to A within 3 steps"
        );
    }

    #[test]
    fn stats_report_names_leaders() {
        plain();
        let text = stats_report(&GraphStats::compute(&season()));

        assert!(text.contains("Number of competitors (nodes): 3"));
        assert!(text.contains("Most wins: A (2 wins)"));
        assert!(text.contains("Most losses: C (2 losses)"));
    }
}
