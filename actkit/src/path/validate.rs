//! Repo-relative path validation.
//!
//! The validator classifies an already-normalized path against the rules
//! that keep it inside the repository root. Checks run in a fixed order and
//! the first match decides the reported [`InvalidPathKind`]:
//!
//! 1. empty, absolute or UNC-like: [`InvalidPathKind::NotRelative`]
//! 2. drive letter prefix (`C:`): [`InvalidPathKind::DrivePrefixed`]
//! 3. leading `..` segment: [`InvalidPathKind::Escapes`]
//! 4. any of `*?[]`: [`InvalidPathKind::GlobCharacter`]

use super::normalize::normalize;
use super::types::{InvalidPathKind, RepoPath, Verdict};

const GLOB_CHARS: [char; 4] = ['*', '?', '[', ']'];

/// Classify a normalized path.
///
/// The input is expected to come from [`normalize`]; an unnormalized path
/// such as `a/../../b` would slip past the escape check. Use
/// [`ensure_repo_relative`] to normalize and validate in one step.
///
/// # Examples
///
/// ```
/// use actkit::path::{validate, InvalidPathKind, Verdict};
///
/// assert!(validate("locales/en").is_valid());
/// assert_eq!(validate("//server/share"), Verdict::Invalid(InvalidPathKind::NotRelative));
/// assert_eq!(validate("C:foo"), Verdict::Invalid(InvalidPathKind::DrivePrefixed));
/// assert_eq!(validate("../b"), Verdict::Invalid(InvalidPathKind::Escapes));
/// assert_eq!(validate("bar[0]"), Verdict::Invalid(InvalidPathKind::GlobCharacter));
/// ```
#[must_use]
pub fn validate(normalized: &str) -> Verdict {
    match check(normalized) {
        Some(kind) => Verdict::Invalid(kind),
        None => Verdict::Valid(RepoPath::new_unchecked(normalized.to_string())),
    }
}

fn check(path: &str) -> Option<InvalidPathKind> {
    // `//server/share` also starts with a single separator.
    if path.is_empty() || path.starts_with('/') {
        return Some(InvalidPathKind::NotRelative);
    }
    if has_drive_prefix(path) {
        return Some(InvalidPathKind::DrivePrefixed);
    }
    if path == ".." || path.starts_with("../") {
        return Some(InvalidPathKind::Escapes);
    }
    if path.contains(&GLOB_CHARS[..]) {
        return Some(InvalidPathKind::GlobCharacter);
    }
    None
}

fn has_drive_prefix(path: &str) -> bool {
    matches!(path.as_bytes(), [letter, b':', ..] if letter.is_ascii_alphabetic())
}

/// Normalize `raw` and validate the result.
///
/// # Errors
///
/// Returns the [`InvalidPathKind`] describing why the path is not an
/// acceptable repo-relative path.
///
/// # Examples
///
/// ```
/// use actkit::path::{ensure_repo_relative, InvalidPathKind};
///
/// assert_eq!(ensure_repo_relative("./a//b/../c").unwrap(), "a/c");
/// assert_eq!(ensure_repo_relative("a/../../b"), Err(InvalidPathKind::Escapes));
/// ```
pub fn ensure_repo_relative(raw: &str) -> Result<RepoPath, InvalidPathKind> {
    validate(&normalize(raw)).into_result()
}
