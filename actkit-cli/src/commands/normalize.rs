//! Command to print the normalized form of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print the normalized form of a path without validating it.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl NormalizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", actkit::normalize(&self.path));
        Ok(())
    }
}
