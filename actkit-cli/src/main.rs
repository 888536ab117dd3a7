//! Main entry point for the actkit CLI.
//!
//! This is the command-line interface for CI workflow steps.
//! It provides commands for handling step inputs and outputs:
//! - `paths`: Read and validate a multi-line list of repo-relative paths
//! - `check`: Validate individual paths
//! - `normalize`: Show the normalized form of a path
//! - `output`: Publish a job output
//! - `run`: Run a command and report the tail of its output on failure

mod cli;
mod commands;
mod error;
mod utils;

use actkit::ProcessEnv;
use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = actkit::init_logger(cli.verbose, cli.quiet, &ProcessEnv);
    logger.install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Paths(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Output(cmd) => cmd.execute(&global),
        cli::Command::Run(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
