//! AI destination suggestions for Tripdeck.
//!
//! Given a trip, the suggester asks a language model for a handful of
//! additional places that fit the trip and already-planned stops, and
//! parses the reply into ready-to-add destinations. The reply contract
//! is strict: one JSON array, parsed as a whole; a single malformed
//! element rejects the entire batch, no partial acceptance.
//!
//! The shipped backend is the Gemini `generateContent` REST endpoint.

pub mod error;
pub mod suggester;

pub use error::AiError;
pub use suggester::{
    DestinationSuggesterTrait, FakeSuggester, GeminiSuggester, ENV_GEMINI_API_KEY,
};
