//! Errors raised while loading a sidebar configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading, parsing or validating configuration.
///
/// Everything past this boundary is treated as valid; the layout resolver
/// itself never fails.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file extension is neither `.toml` nor `.json`.
    #[error("Unsupported configuration format (expected .toml or .json): {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The text could not be parsed.
    #[error("Invalid configuration at {origin}:{line}:{column}: {message}")]
    Parse {
        /// File path, or `<inline>` for text that did not come from a file
        origin: String,
        /// One-based line (0 if unknown)
        line: usize,
        /// One-based column (0 if unknown)
        column: usize,
        message: String,
    },

    /// The text parsed but describes an impossible layout.
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
