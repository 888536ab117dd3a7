//! Error types for the actkit library.
//!
//! This module provides the error hierarchy shared by every actkit
//! operation, using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::path::InvalidPathKind;

/// Result type alias for operations that may fail with an actkit error.
///
/// # Examples
///
/// ```
/// use actkit::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(64)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the actkit library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input was unset, empty, or contained only blank lines.
    #[error("input '{key}' is required")]
    RequiredMissing {
        /// The key (environment variable name) the input was read from.
        key: String,
    },

    /// An entry of a path list failed repo-relative validation.
    ///
    /// Parsing stops at the first such entry, so `line` always points at
    /// the earliest offending line of the input.
    #[error("{key} line {line}: {kind}: {entry:?}")]
    InvalidPathEntry {
        /// The key the list was read from.
        key: String,
        /// 1-based line number within the raw input.
        line: usize,
        /// The offending line, trimmed but not normalized.
        entry: String,
        /// Why the entry was rejected.
        kind: InvalidPathKind,
    },

    /// A value could not be coerced to the expected type.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field (usually an environment variable name) that failed.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Output could not be serialized.
    #[error("failed to serialize {format} output: {message}")]
    Serialization {
        /// The output format that failed.
        format: &'static str,
        /// The underlying serializer message.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error reports a missing required input.
    ///
    /// # Examples
    ///
    /// ```
    /// use actkit::Error;
    ///
    /// let err = Error::RequiredMissing { key: "PATHS".into() };
    /// assert!(err.is_required_missing());
    /// ```
    #[must_use]
    pub fn is_required_missing(&self) -> bool {
        matches!(self, Self::RequiredMissing { .. })
    }

    /// The rejection reason, if this error comes from path list validation.
    #[must_use]
    pub fn invalid_path_kind(&self) -> Option<InvalidPathKind> {
        match self {
            Self::InvalidPathEntry { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
