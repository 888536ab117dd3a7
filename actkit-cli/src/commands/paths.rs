//! Paths command implementation.
//!
//! This module implements the `paths` command, which reads a multi-line
//! list of repo-relative paths from an environment variable, validates
//! every entry, and prints the accepted list.

use crate::error::CliError;
use crate::utils::{publish_output, GlobalOptions};
use actkit::output::{json_line, OutputFormat};
use actkit::{repo_paths_from_env, ProcessEnv};
use clap::{Args, ValueEnum};

/// Read a list of repo-relative paths from an environment variable.
#[derive(Args)]
pub struct PathsCommand {
    /// Environment variable holding one path per line
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "lines",
        env = "ACTKIT_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: FormatArg,

    /// Also publish the list as a JSON array under this output name
    #[arg(long, value_name = "NAME")]
    pub output: Option<String>,
}

/// Output format for the paths command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// One path per line
    Lines,
    /// JSON array
    Json,
    /// YAML sequence
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Lines => OutputFormat::Lines,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

impl PathsCommand {
    /// Execute the paths command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let paths = repo_paths_from_env(&ProcessEnv, &self.key)?;
        log::info!("{} accepted {} path(s)", self.key, paths.len());

        print!("{}", OutputFormat::from(self.format).format(&paths)?);

        if let Some(name) = &self.output {
            publish_output(name, &json_line(&paths)?)?;
        }

        Ok(())
    }
}
