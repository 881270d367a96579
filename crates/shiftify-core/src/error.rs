//! Error types for the Shiftify core library
//!
//! Missing keys, malformed paths and absent values are never errors: they
//! degrade to absence and default substitution. The variants below cover the
//! failures that do reach the caller - a faulty transform function, or a
//! declarative schema document that cannot be interpreted.
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Main error type for Shiftify operations
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied transform failed while computing a field
    #[error("Transform '{transform}' failed for field '{key}': {source}")]
    Transform {
        key: String,
        transform: String,
        #[source]
        source: anyhow::Error,
    },

    /// Schema document could not be interpreted
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        key: Option<String>,
    },

    /// JSON parsing errors while loading schema documents
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing errors while loading schema documents
    #[error("YAML error: {message}")]
    Yaml {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a configuration error for a specific schema key
    pub(crate) fn configuration(key: Option<&str>, message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            key: key.map(str::to_string),
        }
    }

    /// The output key this error is attributed to, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::Transform { key, .. } => Some(key),
            Error::Configuration { key, .. } => key.as_deref(),
            Error::Json { .. } | Error::Yaml { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml {
            message: err.to_string(),
            source: err,
        }
    }
}
