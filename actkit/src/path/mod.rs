//! Repo-relative path handling.
//!
//! Paths supplied by workflow inputs are untrusted. This module decides,
//! purely lexically, whether such a path names a location inside the
//! repository root, and rewrites it to a canonical form.
//!
//! # Pipeline
//!
//! 1. [`normalize`]: backslashes become `/`, separators collapse, `.` and
//!    `..` are resolved, the trailing separator goes away.
//! 2. [`validate`]: the normalized string is classified as
//!    [`Verdict::Valid`] or [`Verdict::Invalid`] with an [`InvalidPathKind`].
//! 3. [`parse_repo_paths`]: a multi-line input is run through 1 and 2 line by
//!    line, stopping at the first rejection and dropping duplicates.
//!
//! Nothing here touches the filesystem or follows symlinks.
//!
//! # Examples
//!
//! ```
//! use actkit::path::{ensure_repo_relative, parse_repo_paths, InvalidPathKind};
//!
//! assert_eq!(ensure_repo_relative("docs/./guide/").unwrap(), "docs/guide");
//! assert_eq!(ensure_repo_relative("/etc/passwd"), Err(InvalidPathKind::NotRelative));
//!
//! let paths = parse_repo_paths("LOCALES", "locales/en\nlocales/fr\nlocales/en/").unwrap();
//! assert_eq!(paths, vec!["locales/en", "locales/fr"]);
//! ```

pub mod list;
pub mod normalize;
mod types;
pub mod validate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use list::{parse_repo_paths, repo_paths_from_env};
pub use normalize::normalize;
pub use types::{InvalidPathKind, RepoPath, Verdict};
pub use validate::{ensure_repo_relative, validate};
