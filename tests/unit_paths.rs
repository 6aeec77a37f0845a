// tests/unit_paths.rs
//! Path enumeration scenarios through the public API.

use beatpath_core::error::BeatpathError;
use beatpath_core::graph::{build, find_paths, snapshot, PathFinder, PathQuery};
use beatpath_core::records::ContestRecord;
use tempfile::tempdir;

fn beat(date: &str, winner: &str, loser: &str) -> ContestRecord {
    ContestRecord::new(date, winner, loser, Some(75.0), Some(70.0))
}

#[test]
fn chain_through_intermediate_competitor() {
    let graph = build(&[beat("d1", "A", "B"), beat("d2", "B", "C")]);
    let groups = find_paths(&graph, "A", "C", 2).unwrap();

    assert_eq!(groups.lengths().collect::<Vec<_>>(), vec![2]);
    assert_eq!(groups.get(2).unwrap(), &[vec!["A", "B", "C"]][..]);
}

#[test]
fn present_but_unreachable_target_is_empty_absent_target_is_error() {
    let graph = build(&[beat("d1", "A", "B"), beat("d2", "C", "B")]);
    assert!(find_paths(&graph, "A", "C", 5).unwrap().is_empty());

    let lonely = build(&[beat("d1", "A", "B")]);
    match find_paths(&lonely, "A", "C", 5) {
        Err(BeatpathError::NodeNotFound { name }) => assert_eq!(name, "C"),
        other => panic!("expected NodeNotFound, got {other:?}"),
    }
}

#[test]
fn queries_against_a_loaded_snapshot_match_the_built_graph() {
    let graph = build(&[
        beat("d1", "A", "B"),
        beat("d2", "A", "C"),
        beat("d3", "B", "D"),
        beat("d4", "C", "D"),
        beat("d5", "D", "E"),
        beat("d6", "B", "C"),
    ]);
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.json");
    snapshot::save(&graph, &path).unwrap();
    let loaded = snapshot::load(&path).unwrap();

    for cutoff in 1..=5 {
        assert_eq!(
            find_paths(&graph, "A", "E", cutoff).unwrap(),
            find_paths(&loaded, "A", "E", cutoff).unwrap(),
            "cutoff {cutoff}"
        );
    }
}

#[test]
fn parallel_batch_shares_one_graph() {
    let records: Vec<_> = (0..30)
        .flat_map(|i| {
            let a = format!("t{i}");
            let b = format!("t{}", (i + 1) % 30);
            let c = format!("t{}", (i + 7) % 30);
            [beat("d", &a, &b), beat("d", &a, &c)]
        })
        .collect();
    let graph = build(&records);
    let finder = PathFinder::new(&graph);

    let targets: Vec<String> = (1..30).map(|i| format!("t{i}")).collect();
    let queries: Vec<_> = targets
        .iter()
        .map(|t| PathQuery { source: "t0", target: t, max_length: 4 })
        .collect();

    let results = finder.find_all(&queries);
    for (query, result) in queries.iter().zip(results) {
        let expected = finder.find(query.source, query.target, 4).unwrap();
        assert_eq!(result.unwrap(), expected);
    }
}
