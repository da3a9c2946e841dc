//! Error types for assertion configuration

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading assertion configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML
    #[error("failed to parse YAML in {origin}: {source}")]
    ParseYaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}
