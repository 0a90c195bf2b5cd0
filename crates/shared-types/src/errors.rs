//! Common error types used across all freq-charts crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for operations
pub type Result<T> = std::result::Result<T, Error>;

/// Base error type for all freq-charts operations
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum Error {
    // Data-related errors
    #[error("Failed to read {path}: {message}")]
    FileRead { path: String, message: String },

    #[error("Invalid JSON in {name}: {message}")]
    Parse { name: String, message: String },

    #[error("No input documents")]
    EmptyInput,

    // Rendering errors
    #[error("Render failed: {message}")]
    Render { message: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },
}

impl Error {
    pub fn file_read(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::FileRead {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn parse(name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Parse {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Error::Render {
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
            field: None,
        }
    }

    pub fn invalid_config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Whether this error aborts a whole aggregation batch.
    pub fn is_fatal_to_batch(&self) -> bool {
        matches!(self, Error::FileRead { .. } | Error::Parse { .. })
    }
}
