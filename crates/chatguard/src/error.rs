//! Error types for chatguard.
//!
//! The filter itself never fails: a blocked message is an ordinary verdict,
//! not an error. Errors here exist only for the surrounding surfaces, loading
//! and validating configuration and serializing CLI output.

use thiserror::Error;

/// The main error type for chatguard operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// A configured custom pattern is not a valid regex.
    #[error("invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern string.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for chatguard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}
