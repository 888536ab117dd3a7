//! Library exports for actkit-cli.
//!
//! This module exports the CLI structure so integration tooling can build
//! the clap command tree without running the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
