//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary output file
//! - Command builder helpers with a clean environment

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the CLI reads; cleared so the host runner's
/// settings cannot leak into tests.
const ACTKIT_VARS: [&str; 5] = [
    "GITHUB_OUTPUT",
    "ACTKIT_LOG_MODE",
    "ACTKIT_TAIL_KB",
    "ACTKIT_OUTPUT_FORMAT",
    "RUNNER_DEBUG",
];

/// Test environment with an isolated output file.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the file used as `GITHUB_OUTPUT`
    pub output_file: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The output file path is not created; the CLI creates it on first write.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output_file = temp_dir.path().join("github_output");

        Self {
            temp_dir,
            output_file,
        }
    }

    /// Get a command builder with the actkit environment cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("actkit").expect("Failed to find actkit binary");
        for var in ACTKIT_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with `GITHUB_OUTPUT` pointing at this
    /// environment's output file.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.env("GITHUB_OUTPUT", &self.output_file);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Contents of the output file, or an empty string if nothing was written.
    pub fn output_contents(&self) -> String {
        std::fs::read_to_string(&self.output_file).unwrap_or_default()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
