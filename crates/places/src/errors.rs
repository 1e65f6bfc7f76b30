use thiserror::Error;

/// Errors from destination search and routing providers.
#[derive(Error, Debug)]
pub enum PlacesError {
    /// Required API key environment variable is not set.
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// A network error occurred while talking to the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("Provider returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The provider answered 200 but with a non-OK API status
    /// (quota exhausted, key rejected, malformed request).
    #[error("Provider status {status}: {message}")]
    Status { status: String, message: String },

    /// A provider response could not be parsed.
    #[error("Failed to parse provider response: {0}")]
    ParseFailed(String),

    /// No route could be computed for the given stops.
    #[error("Routing failed: {0}")]
    RouteFailed(String),
}
