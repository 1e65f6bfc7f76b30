//! Core error types for the Tripdeck application.
//!
//! This module defines store-agnostic error types. Store-specific errors
//! (from the Firestore REST layer) are converted to these types by the
//! storage crate.

use chrono::ParseError as ChronoParseError;
use std::num::ParseFloatError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the trip-planning core.
///
/// Every failure is surfaced to the embedding UI as a transient
/// notification; nothing here is fatal to the process and nothing is
/// retried automatically.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Trip import rejected: {0}")]
    Import(String),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic error type for remote document operations.
///
/// The storage layer converts transport- and API-specific failures into
/// this format, keeping the core free of HTTP types.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not reach the remote store at all.
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// The store rejected or failed the request.
    #[error("Store request failed: {0}")]
    RequestFailed(String),

    /// The requested document was not found.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The store denied access to the document or collection.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// A stored document could not be decoded into a domain model.
    #[error("Failed to decode document: {0}")]
    DecodeFailed(String),

    /// A multi-write batch failed; no writes were applied.
    #[error("Batch write failed: {0}")]
    BatchFailed(String),

    /// Internal/unexpected store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
