use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::graph::{ScorePresence, TiePolicy};

#[derive(Parser)]
#[command(
    name = "beatpath",
    version,
    about = "Who beat whom: chains of wins between competitors"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Config file to use instead of ./beatpath.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate contest records into a graph snapshot
    Build(BuildArgs),
    /// List every chain of wins from one competitor to others
    Paths(PathsArgs),
    /// Summary counts for a graph snapshot
    Stats(StatsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// JSON array of contest records
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,
    /// Where to write the graph snapshot
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// How to treat equal scores
    #[arg(long, value_enum)]
    pub ties: Option<TiePolicy>,
    /// Which scores count as present
    #[arg(long, value_enum)]
    pub scores: Option<ScorePresence>,
    /// Print the build report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PathsArgs {
    /// Competitor the chains start from
    #[arg(value_name = "FROM")]
    pub from: String,
    /// Competitor(s) the chains end at; several run as one parallel batch
    #[arg(value_name = "TO", required = true)]
    pub to: Vec<String>,
    /// Maximum chain length in wins
    #[arg(long, short)]
    pub cutoff: Option<usize>,
    /// Graph snapshot to query
    #[arg(long, short, value_name = "FILE")]
    pub graph: Option<PathBuf>,
    /// Print grouped paths as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Graph snapshot to summarize
    #[arg(long, short, value_name = "FILE")]
    pub graph: Option<PathBuf>,
    /// Print statistics as JSON
    #[arg(long)]
    pub json: bool,
}
