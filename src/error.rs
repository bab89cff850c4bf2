//! Error types for entity-codegen

use thiserror::Error;

/// Result type alias for entity-codegen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during entity generation
///
/// Every variant aborts the whole generation call before anything is
/// written; partial output files are never produced.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Module conflict: {0}")]
    Conflict(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for CodegenError {
    fn from(err: config::ConfigError) -> Self {
        CodegenError::ConfigError(err.to_string())
    }
}
