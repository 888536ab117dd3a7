#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # actkit
//!
//! Helpers for CI workflow steps that take untrusted input.
//!
//! Workflow inputs arrive as environment variables. This library turns them
//! into values a step can act on safely, publishes results back to the
//! runner, and keeps the tail of a command's output for failure reports.
//!
//! ## Core Types
//!
//! - [`RepoPath`], [`Verdict`] and [`InvalidPathKind`]: Repo-relative path validation
//! - [`EnvSource`]: Where inputs are read from
//! - [`GithubOutput`]: Job output publishing
//! - [`TailRing`] and [`Tee`]: Bounded capture of command output
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use actkit::path::{parse_repo_paths, ensure_repo_relative};
//!
//! let path = ensure_repo_relative("src\\lib\\..\\main.rs").unwrap();
//! assert_eq!(path, "src/main.rs");
//!
//! let paths = parse_repo_paths("PATHS", "a\r\n\r\n./b/\na").unwrap();
//! assert_eq!(paths, vec!["a", "b"]);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod tailring;

// Re-export key types at crate root for convenience
pub use config::{parse_bool_env, parse_string_array_env, parse_uint_env, EnvSource, ProcessEnv};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{write_to_github_output, GithubOutput, OutputFormat};
pub use path::{
    ensure_repo_relative, normalize, parse_repo_paths, repo_paths_from_env, validate,
    InvalidPathKind, RepoPath, Verdict,
};
pub use tailring::{TailRing, Tee};
