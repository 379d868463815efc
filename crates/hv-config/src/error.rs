//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while reading or writing configuration profiles.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No profile is stored under the requested prefix.
    #[error("no server configuration with prefix '{prefix}'")]
    NotFound {
        /// The prefix that was looked up.
        prefix: String,
    },

    /// Prefix is not usable as a profile key.
    #[error("invalid configuration prefix: {0}")]
    InvalidPrefix(String),

    /// I/O failure in the persistence layer.
    #[error("configuration store I/O error: {0}")]
    Io(String),

    /// Stored data could not be serialized or deserialized.
    #[error("configuration serialization error: {0}")]
    Serialization(String),
}

impl ConfigError {
    /// Creates a not-found error for a prefix.
    #[must_use]
    pub fn not_found(prefix: impl Into<String>) -> Self {
        Self::NotFound {
            prefix: prefix.into(),
        }
    }

    /// Checks if this is a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
