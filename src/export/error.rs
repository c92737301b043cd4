//! Errors that end an export run.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// A `regex:` selector failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// No selector matched any type
    #[error("Nothing to export.")]
    NothingToExport,

    /// The template source failed for one type
    #[error("Template lookup failed for '{type_name}': {message}")]
    Provider { type_name: String, message: String },

    /// Writing an output file failed
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing markup to stdout failed
    #[error("Failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

impl ExportError {
    pub fn pattern(pattern: &str, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.to_string(),
            source,
        }
    }
}
