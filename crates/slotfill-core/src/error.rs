//! Core error types for slotfill-core.
//!
//! Unschedulable input is never an error: a task that does not fit is either
//! omitted or reported with `completely_scheduled = false`. The variants here
//! cover bad configuration and malformed boundary input only.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for slotfill-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file (de)serialization errors
    #[error("TOML error: {0}")]
    Toml(String),
}

/// Configuration-specific errors.
///
/// Raised when a scheduling strategy cannot be resolved or the settings file
/// is unusable. These fail fast; nothing attempts recovery.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Strategy selector did not name a known algorithm
    #[error("Scheduling algorithm not recognized: '{0}'")]
    UnknownAlgorithm(String),

    /// No strategy selector was supplied
    #[error("A scheduling algorithm must be supplied")]
    MissingAlgorithm,

    /// No task list was supplied
    #[error("Task list cannot be missing")]
    MissingTaskList,

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown dotted configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end ({end}) must not be before start ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for CoreError {
    fn from(err: toml::ser::Error) -> Self {
        CoreError::Toml(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
