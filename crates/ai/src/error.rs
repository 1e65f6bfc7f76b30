//! Suggestion error types.

use thiserror::Error;

/// Errors from the destination suggester.
#[derive(Debug, Error)]
pub enum AiError {
    /// Missing API key for the model provider.
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// A network error occurred while talking to the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider rejected or failed the request.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The model reply was not the expected strict JSON array.
    /// The whole batch is discarded.
    #[error("Malformed model reply: {0}")]
    MalformedReply(String),
}
