//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, NormalizeCommand, OutputCommand, PathsCommand, RunCommand,
};
use clap::{Parser, Subcommand};

/// Helpers for CI workflow steps.
#[derive(Parser)]
#[command(name = "actkit")]
#[command(version, about = "Helpers for CI workflow steps", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Read a list of repo-relative paths from an environment variable
    Paths(PathsCommand),

    /// Check whether paths are safe repo-relative paths
    Check(CheckCommand),

    /// Print the normalized form of a path
    Normalize(NormalizeCommand),

    /// Publish a job output
    Output(OutputCommand),

    /// Run a command, keeping the tail of its output
    Run(RunCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
