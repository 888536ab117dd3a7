//! Publishing job outputs through the `GITHUB_OUTPUT` file.
//!
//! The runner points `GITHUB_OUTPUT` at a file; every `name=value` line
//! appended to it becomes an output of the current step. Values spanning
//! several lines use the `name<<DELIMITER` form.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::EnvSource;
use crate::error::Result;

/// Environment variable naming the output file.
pub const GITHUB_OUTPUT_VAR: &str = "GITHUB_OUTPUT";

const DELIMITER_BASE: &str = "ACTKIT_EOF";

/// Appender for the step output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubOutput {
    path: PathBuf,
}

impl GithubOutput {
    /// Use `path` as the output file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The output file named by `GITHUB_OUTPUT`, or `None` when unset or empty.
    pub fn from_env(env: &impl EnvSource) -> Option<Self> {
        let path = env.raw(GITHUB_OUTPUT_VAR);
        (!path.is_empty()).then(|| Self::new(path))
    }

    /// Path of the output file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a `name=value` line.
    ///
    /// The file is created if missing; its parent directory is not.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or written.
    pub fn append(&self, name: &str, value: &str) -> Result<()> {
        self.write_record(&format!("{name}={value}\n"))
    }

    /// Append a value using the heredoc form, safe for multi-line values.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or written.
    pub fn append_multiline(&self, name: &str, value: &str) -> Result<()> {
        let delimiter = delimiter_for(value);
        self.write_record(&format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
    }

    fn write_record(&self, record: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.write_all(record.as_bytes())?;
        log::debug!("wrote {} bytes to {}", record.len(), self.path.display());
        Ok(())
    }
}

/// A delimiter that does not occur anywhere in `value`.
fn delimiter_for(value: &str) -> String {
    let mut delimiter = DELIMITER_BASE.to_string();
    let mut n = 0u32;
    while value.contains(&delimiter) {
        n += 1;
        delimiter = format!("{DELIMITER_BASE}_{n}");
    }
    delimiter
}

/// Append `name=value` to the file named by `GITHUB_OUTPUT`.
///
/// Returns `false` when the variable is unset or the write fails; the
/// failure is logged as a warning rather than propagated.
pub fn write_to_github_output(env: &impl EnvSource, name: &str, value: &str) -> bool {
    let Some(output) = GithubOutput::from_env(env) else {
        log::warn!("{GITHUB_OUTPUT_VAR} is not set, dropping output '{name}'");
        return false;
    };
    match output.append(name, value) {
        Ok(()) => true,
        Err(e) => {
            log::warn!(
                "failed to write output '{name}' to {}: {e}",
                output.path().display()
            );
            false
        }
    }
}
