//! Utility functions for CLI operations.

use crate::error::CliError;
use actkit::{GithubOutput, ProcessEnv};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Publish `value` as the job output `name`.
///
/// Values containing a newline are written in the delimited multi-line form.
///
/// # Errors
///
/// Returns `InvalidArguments` when `GITHUB_OUTPUT` is not set, or the
/// underlying error when the file cannot be written.
pub fn publish_output(name: &str, value: &str) -> Result<(), CliError> {
    let output = GithubOutput::from_env(&ProcessEnv).ok_or_else(|| {
        CliError::InvalidArguments(format!(
            "cannot publish '{name}': {} is not set",
            actkit::output::github::GITHUB_OUTPUT_VAR
        ))
    })?;

    if value.contains('\n') {
        output.append_multiline(name, value)?;
    } else {
        output.append(name, value)?;
    }
    log::info!("published output '{name}' to {}", output.path().display());
    Ok(())
}
