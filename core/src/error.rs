//! Settings loader error types

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while loading settings.
///
/// Every variant aborts startup; nothing here is retried or defaulted.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Dot-env file not found: {}", .0.display())]
    DotEnvNotFound(PathBuf),

    #[error("Failed to read dot-env file {}: {source}", .path.display())]
    DotEnv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }

    /// Name of the environment variable that caused the failure, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::MissingRequired(key) => Some(key),
            ConfigError::InvalidValue { key, .. } => Some(key),
            ConfigError::DotEnvNotFound(_) | ConfigError::DotEnv { .. } => None,
        }
    }
}

/// Result type alias using ConfigError
pub type Result<T> = std::result::Result<T, ConfigError>;
