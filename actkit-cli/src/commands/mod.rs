//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `paths`: Parse a path list from an environment variable
//! - `check`: Validate paths one by one
//! - `normalize`: Print the normalized form of a path
//! - `output`: Append a value to the job output file
//! - `run`: Run a command and capture the tail of its output
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod normalize;
pub mod output;
pub mod paths;
pub mod run;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use normalize::NormalizeCommand;
pub use output::OutputCommand;
pub use paths::PathsCommand;
pub use run::RunCommand;
