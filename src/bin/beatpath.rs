use beatpath_core::cli::{self, Cli};
use beatpath_core::exit::BeatpathExit;
use beatpath_core::logging;
use clap::Parser;
use colored::Colorize;

fn main() -> BeatpathExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd, cli.config.as_deref())
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(BeatpathExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            BeatpathExit::Error
        }
    }
}
