// src/exit.rs
//! Standardized process exit codes for `beatpath`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum BeatpathExit {
    /// Operation completed successfully (including "no paths found").
    Success = 0,
    /// Generic error (I/O, unreadable records, bad config or snapshot).
    Error = 1,
    /// A queried competitor does not exist in the graph.
    NotFound = 2,
}

impl BeatpathExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for BeatpathExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
