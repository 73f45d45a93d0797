//! Error types for configuration and export

use thiserror::Error;

/// Errors raised around the extraction engine.
///
/// Extraction itself never fails; these cover reading configuration and
/// writing export files.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to read or write a file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to serialize an export projection
    #[error("Failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Unknown value for an enumerated option
    #[error("Unknown {option} value: {value}")]
    UnknownValue { option: &'static str, value: String },
}

/// Result type for fallible crate operations
pub type Result<T> = std::result::Result<T, ExtractError>;
