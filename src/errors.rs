//! Centralized error handling.
//!
//! Provides a unified error type for the entire crate.

use thiserror::Error;

/// Application error types
/// SOLID - Open/Closed: Extend via new variants without modifying behavior
#[derive(Error, Debug)]
pub enum AppError {
    // Descriptor file I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse descriptor: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize descriptor: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Failed to serialize configuration: {0}")]
    Json(#[from] serde_json::Error),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
