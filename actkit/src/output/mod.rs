//! Output formatting and publishing.
//!
//! This module renders accepted path lists in the formats the CLI offers and,
//! through [`github`], publishes values as job outputs.

pub mod github;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::path::RepoPath;

pub use github::{write_to_github_output, GithubOutput};

/// Available output formats for path lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One path per line.
    #[default]
    Lines,
    /// A pretty-printed JSON array.
    Json,
    /// A YAML sequence.
    Yaml,
}

impl OutputFormat {
    /// Render `paths` in this format.
    ///
    /// The result always ends with a newline unless `paths` is empty and the
    /// format is [`OutputFormat::Lines`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the serializer fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use actkit::output::OutputFormat;
    /// use actkit::path::parse_repo_paths;
    ///
    /// let paths = parse_repo_paths("PATHS", "a\nb/c").unwrap();
    /// assert_eq!(OutputFormat::Lines.format(&paths).unwrap(), "a\nb/c\n");
    /// ```
    pub fn format(self, paths: &[RepoPath]) -> Result<String> {
        match self {
            Self::Lines => Ok(paths.iter().map(|p| format!("{p}\n")).collect()),
            Self::Json => serde_json::to_string_pretty(paths)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| Error::Serialization {
                    format: "json",
                    message: e.to_string(),
                }),
            Self::Yaml => serde_yaml::to_string(paths).map_err(|e| Error::Serialization {
                format: "yaml",
                message: e.to_string(),
            }),
        }
    }
}

/// Render `paths` as a single-line JSON array, the form job outputs expect.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the serializer fails.
pub fn json_line(paths: &[RepoPath]) -> Result<String> {
    serde_json::to_string(paths).map_err(|e| Error::Serialization {
        format: "json",
        message: e.to_string(),
    })
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lines => write!(f, "lines"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lines" | "text" => Ok(Self::Lines),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::Validation {
                field: "format".into(),
                message: format!("unknown output format: '{s}' (expected lines/json/yaml)"),
            }),
        }
    }
}
