//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use actkit::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments or missing environment.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Semantic failure (e.g., a checked path is invalid) - exit code 1.
    SemanticFailure(String),

    /// A command started by `run` did not succeed.
    ChildFailed {
        /// The program that was run.
        program: String,
        /// Its exit code, or `None` if it was killed by a signal.
        code: Option<i32>,
    },
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., invalid path passed to `check`)
    /// - 2: Required input missing
    /// - 3: Invalid entry in a path list
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    ///
    /// A failed `run` child exits with the child's own code, or 1 when it
    /// was terminated by a signal.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::RequiredMissing { .. } => 2,
                LibError::InvalidPathEntry { .. } => 3,
                LibError::Io(_) => 5,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::ChildFailed { code, .. } => code.unwrap_or(1),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
            CliError::ChildFailed {
                program,
                code: Some(code),
            } => write!(f, "'{program}' exited with status {code}"),
            CliError::ChildFailed {
                program,
                code: None,
            } => write!(f, "'{program}' was terminated by a signal"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
