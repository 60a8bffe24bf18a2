//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing a persisted address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The file could not be opened, read, written or renamed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The book could not be encoded
    #[error("Failed to encode address book: {0}")]
    Encode(String),

    /// The payload is not a valid address book
    #[error("Failed to decode address book: {0}")]
    Decode(String),

    /// The file does not start with the address book header
    #[error("Not an address book file")]
    BadMagic,

    /// The file was written with a schema version this build cannot read
    #[error("Unsupported address book version: {0}")]
    UnsupportedVersion(u16),

    /// Two stored records share a name
    #[error("Duplicate record in stored address book: {0}")]
    DuplicateRecord(String),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors returned by address book operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// No record is stored under the given name
    #[error("Record not found: {0}")]
    KeyNotFound(String),

    /// Pages must hold at least one record
    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    /// A field failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Saving or loading failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
