//! Input configuration for workflow steps.
//!
//! Everything a step is told arrives through environment variables, most of
//! them multi-line. This module provides:
//! - [`EnvSource`]: the lookup seam, with [`ProcessEnv`] for the real environment
//! - Line splitting for multi-line values ([`split_lines`], [`numbered_lines`])
//! - Coercion helpers ([`parse_bool_env`], [`parse_uint_env`], [`parse_string_array_env`])

pub mod environment;
pub mod lines;

pub use environment::{
    parse_bool_env, parse_string_array_env, parse_uint_env, EnvSource, ProcessEnv,
};
pub use lines::{numbered_lines, split_lines};
