//! Core types for repo-relative path validation.

use std::fmt;

use serde::Serialize;

/// Reason a path was rejected by the validator.
///
/// The `Display` text of each kind is stable: workflow tooling matches on
/// these substrings, so they must not change.
///
/// # Examples
///
/// ```
/// use actkit::path::InvalidPathKind;
///
/// assert_eq!(
///     InvalidPathKind::GlobCharacter.to_string(),
///     "glob characters are not allowed"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidPathKind {
    /// Empty, absolute (`/x`) or UNC-like (`//server/share`).
    NotRelative,
    /// Starts with a drive letter such as `C:`.
    DrivePrefixed,
    /// Resolves above the repository root (leading `..`).
    Escapes,
    /// Contains one of `*`, `?`, `[`, `]`.
    GlobCharacter,
}

impl InvalidPathKind {
    /// Canonical message for this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotRelative => "path must be relative to repo",
            Self::DrivePrefixed => "drive-prefixed paths are not allowed",
            Self::Escapes => "path escapes repo root",
            Self::GlobCharacter => "glob characters are not allowed",
        }
    }
}

impl fmt::Display for InvalidPathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for InvalidPathKind {}

/// A normalized path that passed repo-relative validation.
///
/// Values of this type can only be produced by [`validate`](super::validate)
/// and the functions built on it, so holding a `RepoPath` means the path is
/// relative, lexically inside the repository root, and free of glob
/// metacharacters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RepoPath(String);

impl RepoPath {
    pub(crate) fn new_unchecked(path: String) -> Self {
        Self(path)
    }

    /// The path as a forward-slash string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the path, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RepoPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for RepoPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RepoPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Outcome of validating a single normalized path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The path is acceptable.
    Valid(RepoPath),
    /// The path was rejected for the given reason.
    Invalid(InvalidPathKind),
}

impl Verdict {
    /// Returns `true` for [`Verdict::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Convert into a `Result`, so callers can use `?` when a rejection is fatal.
    ///
    /// # Errors
    ///
    /// Returns the rejection kind for [`Verdict::Invalid`].
    pub fn into_result(self) -> Result<RepoPath, InvalidPathKind> {
        match self {
            Self::Valid(path) => Ok(path),
            Self::Invalid(kind) => Err(kind),
        }
    }
}
