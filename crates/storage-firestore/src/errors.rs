//! Storage-layer error types and their mapping into the core taxonomy.

use thiserror::Error;
use tripdeck_core::errors::{Error as CoreError, StoreError};

/// Errors raised by the Firestore REST layer.
///
/// Repositories convert these into [`tripdeck_core::errors::StoreError`]
/// before they cross the crate boundary, so the core never sees HTTP
/// types.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The request never produced a response (DNS, TLS, connect, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Firestore answered with a non-success status.
    #[error("Firestore returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// A document payload could not be mapped into a domain model.
    #[error("Failed to decode document '{path}': {reason}")]
    Decode { path: String, reason: String },

    /// A domain model could not be mapped into Firestore fields.
    #[error("Failed to encode fields: {0}")]
    Encode(String),

    /// Required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Transport(inner) => {
                if inner.is_connect() || inner.is_timeout() {
                    CoreError::Store(StoreError::ConnectionFailed(inner.to_string()))
                } else {
                    CoreError::Store(StoreError::RequestFailed(inner.to_string()))
                }
            }
            StorageError::Api { status, message } => match status {
                401 | 403 => CoreError::Store(StoreError::PermissionDenied(message)),
                404 => CoreError::Store(StoreError::NotFound(message)),
                _ => CoreError::Store(StoreError::RequestFailed(format!(
                    "HTTP {status}: {message}"
                ))),
            },
            StorageError::Decode { path, reason } => {
                CoreError::Store(StoreError::DecodeFailed(format!("{path}: {reason}")))
            }
            StorageError::Encode(reason) => CoreError::Store(StoreError::Internal(reason)),
            StorageError::MissingEnv(key) => CoreError::MissingConfigKey(key),
        }
    }
}
