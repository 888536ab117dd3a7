//! Environment variable lookup and coercion.
//!
//! Workflow steps receive their inputs as environment variables. Lookups go
//! through the [`EnvSource`] trait so that parsing logic can be exercised
//! against an in-memory map instead of the process environment.

use std::collections::HashMap;
use std::env;

use super::lines::split_lines;
use crate::error::{Error, Result};

/// A source of raw environment values.
///
/// # Examples
///
/// ```
/// use actkit::config::EnvSource;
/// use std::collections::HashMap;
///
/// let mut vars = HashMap::new();
/// vars.insert("PATHS".to_string(), "a\nb".to_string());
///
/// assert_eq!(vars.raw("PATHS"), "a\nb");
/// assert_eq!(vars.raw("UNSET"), "");
/// ```
pub trait EnvSource {
    /// Look up `key`, returning `None` when it is unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Look up `key`, treating an unset variable as the empty string.
    fn raw(&self, key: &str) -> String {
        self.var(key).unwrap_or_default()
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset.
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Read `key` as a list of non-blank, trimmed lines.
///
/// An unset or empty variable yields an empty list.
#[must_use]
pub fn parse_string_array_env(env: &impl EnvSource, key: &str) -> Vec<String> {
    split_lines(&env.raw(key))
}

/// Read `key` as a boolean.
///
/// Unset and empty values are `false`. Recognized values (case-insensitive)
/// are `1`, `t`, `true`, `0`, `f`, `false`.
///
/// # Errors
///
/// Returns [`Error::Validation`] for any other value.
///
/// # Examples
///
/// ```
/// use actkit::config::parse_bool_env;
/// use std::collections::HashMap;
///
/// let mut vars = HashMap::new();
/// vars.insert("RUNNER_DEBUG".to_string(), "1".to_string());
/// vars.insert("BROKEN".to_string(), "maybe".to_string());
///
/// assert!(parse_bool_env(&vars, "RUNNER_DEBUG").unwrap());
/// assert!(!parse_bool_env(&vars, "UNSET").unwrap());
/// assert!(parse_bool_env(&vars, "BROKEN").is_err());
/// ```
pub fn parse_bool_env(env: &impl EnvSource, key: &str) -> Result<bool> {
    let value = env.raw(key);
    if value.is_empty() {
        return Ok(false);
    }
    parse_bool(key, &value)
}

fn parse_bool(field: &str, s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(Error::Validation {
            field: field.into(),
            message: format!("invalid boolean value: '{s}' (expected true/false/1/0/t/f)"),
        }),
    }
}

/// Read `key` as a positive integer, falling back to `default`.
///
/// The default is used when the variable is unset, empty, not an integer,
/// or less than 1.
///
/// # Examples
///
/// ```
/// use actkit::config::parse_uint_env;
/// use std::collections::HashMap;
///
/// let mut vars = HashMap::new();
/// vars.insert("ACTKIT_TAIL_KB".to_string(), "42".to_string());
/// vars.insert("ZERO".to_string(), "0".to_string());
///
/// assert_eq!(parse_uint_env(&vars, "ACTKIT_TAIL_KB", 64), 42);
/// assert_eq!(parse_uint_env(&vars, "ZERO", 64), 64);
/// assert_eq!(parse_uint_env(&vars, "UNSET", 64), 64);
/// ```
#[must_use]
pub fn parse_uint_env(env: &impl EnvSource, key: &str, default: usize) -> usize {
    let value = env.raw(key);
    if value.is_empty() {
        return default;
    }
    match value.parse::<i64>().ok().and_then(|n| usize::try_from(n).ok()) {
        Some(n) if n >= 1 => n,
        _ => {
            log::debug!("{key}={value:?} is not a positive integer, using {default}");
            default
        }
    }
}
