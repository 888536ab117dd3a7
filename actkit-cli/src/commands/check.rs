//! Check command implementation.
//!
//! Each argument is validated on its own; one bad path does not stop the
//! others from being reported.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use actkit::ensure_repo_relative;
use clap::Args;

/// Check whether paths are safe repo-relative paths.
#[derive(Args)]
pub struct CheckCommand {
    /// Paths to check
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut invalid = 0usize;

        for raw in &self.paths {
            match ensure_repo_relative(raw) {
                Ok(path) => println!("ok  {path}"),
                Err(kind) => {
                    invalid += 1;
                    println!("invalid  {raw}: {kind}");
                }
            }
        }

        if invalid > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{invalid} of {} path(s) invalid",
                self.paths.len()
            )));
        }
        Ok(())
    }
}
