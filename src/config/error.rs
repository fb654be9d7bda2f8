//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid regex pattern for adapter filtering.
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        /// The invalid pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Invalid output format name.
    #[error("Invalid output format '{value}': expected table, csv, or json")]
    InvalidFormat {
        /// The invalid value provided
        value: String,
    },

    /// Invalid concurrency bound.
    #[error("Invalid concurrency '{value}': must be at least 1")]
    InvalidConcurrency {
        /// The invalid value provided
        value: usize,
    },

    /// Invalid inventory timeout.
    #[error("Invalid timeout: {reason}")]
    InvalidTimeout {
        /// Reason for invalidity
        reason: &'static str,
    },

    /// Invalid user-defined taxonomy feature.
    #[error("Invalid taxonomy feature '{name}': {reason}")]
    InvalidFeature {
        /// Name of the offending feature (may be empty)
        name: String,
        /// Reason for invalidity
        reason: &'static str,
    },
}
