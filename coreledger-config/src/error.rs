//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// An override variable was set but could not be parsed
    #[error("Invalid value '{value}' for {variable}: {reason}")]
    InvalidEnv {
        variable: String,
        value: String,
        reason: String,
    },

    /// A domain rejected its settings during validation
    #[error("Domain configuration error in {domain}: {message}")]
    DomainError { domain: String, message: String },
}
