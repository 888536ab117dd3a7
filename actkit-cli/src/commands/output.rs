//! Command to publish a job output.

use crate::error::CliError;
use crate::utils::{publish_output, GlobalOptions};
use clap::Args;

/// Append a value to the job output file named by `GITHUB_OUTPUT`.
#[derive(Args)]
pub struct OutputCommand {
    /// Output name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output value; values with newlines use the delimited form
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

impl OutputCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if self.name.is_empty() {
            return Err(CliError::InvalidArguments(
                "output name must not be empty".to_string(),
            ));
        }
        publish_output(&self.name, &self.value)
    }
}
