//! Who beat whom.
//!
//! Folds head-to-head contest results into a directed graph (one aggregated
//! edge per winner/loser pair) and enumerates every simple chain of wins of
//! bounded length between two competitors.
//!
//! ```
//! use beatpath_core::graph::{build, find_paths};
//! use beatpath_core::records::ContestRecord;
//!
//! let graph = build(&[
//!     ContestRecord::new("d1", "A", "B", Some(70.0), Some(65.0)),
//!     ContestRecord::new("d2", "B", "C", Some(80.0), Some(77.0)),
//! ]);
//! let groups = find_paths(&graph, "A", "C", 2).unwrap();
//! assert_eq!(groups.get(2).unwrap()[0], ["A", "B", "C"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod logging;
pub mod records;
pub mod reporting;
