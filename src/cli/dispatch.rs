//! Command dispatch logic extracted from the binary.

use std::path::Path;

use anyhow::Result;

use super::args::Commands;
use super::handlers::{handle_build, handle_paths, handle_stats};
use crate::config::Config;
use crate::exit::BeatpathExit;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the config cannot be loaded or the handler fails.
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<BeatpathExit> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load_in(Path::new("."))?,
    };

    match command {
        Commands::Build(args) => handle_build(&config, &args),
        Commands::Paths(args) => handle_paths(&config, &args),
        Commands::Stats(args) => handle_stats(&config, &args),
    }
}
