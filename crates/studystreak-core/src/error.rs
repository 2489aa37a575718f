//! Core error types for studystreak-core.
//!
//! This module defines the error hierarchy using thiserror. Derived
//! computations (aggregation, streaks, grid) are total over their valid
//! input domain and never appear here; errors only arise at the
//! boundaries: validation, storage, configuration, and import.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studystreak-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Session store errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Session store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the session database
    #[error("Failed to open session store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Session store migration failed: {0}")]
    MigrationFailed(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors raised at the input boundary, before anything
/// reaches the aggregator.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Duration outside the accepted range
    #[error("Invalid duration: {minutes} minutes ({message})")]
    InvalidDuration { minutes: i64, message: String },

    /// Malformed calendar date string
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

/// Errors raised while importing an exported data file.
#[derive(Error, Debug)]
pub enum ImportError {
    /// File is not valid JSON
    #[error("Import file is not valid JSON: {0}")]
    Malformed(String),

    /// JSON document lacks a settings section
    #[error("Import file has no 'settings' section")]
    MissingSettings,

    /// Settings section could not be interpreted
    #[error("Import settings are invalid: {0}")]
    InvalidSettings(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::QueryFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
