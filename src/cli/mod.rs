mod handlers;
mod logger;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::PlotError;

pub fn run() -> Result<(), PlotError> {
    run_with(parse::Cli::parse())
}

/// Dispatch an already-parsed command line.
pub fn run_with(cli: Cli) -> Result<(), PlotError> {
    logger::init_cli_logger(cli.verbose);
    match cli.cmd {
        parse::Command::Palette => {
            handlers::palette();
            Ok(())
        }
        parse::Command::Style(a) => handlers::style(&a),
        parse::Command::Hist(a) => handlers::hist(&a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
