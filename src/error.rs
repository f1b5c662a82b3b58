//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when editing a record's phones.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// No phone with the given value exists on the record
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    /// The phone was found but the replacement value was rejected
    #[error(transparent)]
    InvalidPhone(#[from] ValidationError),
}

/// Errors that can occur while loading or saving a directory snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The keyword is known but the arguments don't fit
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// The keyword is not a known command
    #[error("Unknown command: '{0}'")]
    Unknown(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
