//! Parsing of repo-relative path lists.
//!
//! A path list is a multi-line input with one path per line. Every line is
//! normalized and validated in order; the first rejected line aborts the
//! whole parse, so a caller never operates on a partially validated list.
//! Accepted paths are deduplicated, keeping the first occurrence.

use std::collections::HashSet;

use super::normalize::normalize;
use super::types::{RepoPath, Verdict};
use super::validate::validate;
use crate::config::{numbered_lines, EnvSource};
use crate::error::{Error, Result};

/// Parse `raw` as a list of repo-relative paths read from `key`.
///
/// # Errors
///
/// - [`Error::RequiredMissing`] if `raw` holds no non-blank line
/// - [`Error::InvalidPathEntry`] for the first line that fails validation
///
/// # Examples
///
/// ```
/// use actkit::path::parse_repo_paths;
///
/// let paths = parse_repo_paths("PATHS", "./x\nx/\n./y\na//b/../c\nx").unwrap();
/// assert_eq!(paths, vec!["x", "y", "a/c"]);
///
/// let err = parse_repo_paths("PATHS", "a\n../up\nb").unwrap_err();
/// assert!(err.to_string().contains("escapes repo root"));
/// ```
pub fn parse_repo_paths(key: &str, raw: &str) -> Result<Vec<RepoPath>> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();
    let mut any_line = false;

    for (line, entry) in numbered_lines(raw) {
        any_line = true;
        match validate(&normalize(entry)) {
            Verdict::Valid(path) => {
                if seen.insert(path.as_str().to_string()) {
                    paths.push(path);
                } else {
                    log::debug!("{key} line {line}: skipping duplicate path {path}");
                }
            }
            Verdict::Invalid(kind) => {
                return Err(Error::InvalidPathEntry {
                    key: key.to_string(),
                    line,
                    entry: entry.to_string(),
                    kind,
                });
            }
        }
    }

    if !any_line {
        return Err(Error::RequiredMissing {
            key: key.to_string(),
        });
    }

    Ok(paths)
}

/// Read `key` from `env` and parse it with [`parse_repo_paths`].
///
/// An unset variable is treated like an empty one.
///
/// # Errors
///
/// Same as [`parse_repo_paths`].
///
/// # Examples
///
/// ```
/// use actkit::path::repo_paths_from_env;
/// use std::collections::HashMap;
///
/// let mut env = HashMap::new();
/// env.insert("LOCALES_PATHS".to_string(), "locales".to_string());
///
/// assert_eq!(repo_paths_from_env(&env, "LOCALES_PATHS").unwrap(), vec!["locales"]);
/// assert!(repo_paths_from_env(&env, "UNSET").unwrap_err().is_required_missing());
/// ```
pub fn repo_paths_from_env(env: &impl EnvSource, key: &str) -> Result<Vec<RepoPath>> {
    parse_repo_paths(key, &env.raw(key))
}
