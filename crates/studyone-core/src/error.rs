//! Core error types for studyone-core.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyone-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Backup import/export errors
    #[error("Backup error: {0}")]
    Backup(#[from] BackupError),

    /// Entity lookup failures
    #[error("No record with id '{id}' under key '{key}'")]
    NotFound { key: &'static str, id: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Data directory could not be resolved or created
    #[error("Cannot prepare data directory: {0}")]
    DataDir(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::QueryFailed(err.to_string())
    }
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field was empty on create/update
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Backup import/export errors.
#[derive(Error, Debug)]
pub enum BackupError {
    /// The backup document is not valid JSON
    #[error("Backup is not valid JSON: {0}")]
    InvalidJson(String),

    /// The backup document is JSON but not an object keyed by store keys
    #[error("Backup must be a JSON object keyed by store keys")]
    NotAnObject,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
