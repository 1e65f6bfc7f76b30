//! Destination suggestion service.
//!
//! Builds a prompt from the trip's title and already-planned stops, calls
//! the model, strips the markdown code fences models like to wrap JSON
//! in, and parses the reply as one strict JSON array.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use tripdeck_core::trips::{Destination, DestinationKind, Trip};

use crate::error::AiError;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-pro";

/// Environment variable holding the Gemini API key.
pub const ENV_GEMINI_API_KEY: &str = "TRIPDECK_GEMINI_API_KEY";

// ============================================================================
// Suggester Trait
// ============================================================================

/// Trait for suggesting destinations for a trip.
#[async_trait]
pub trait DestinationSuggesterTrait: Send + Sync {
    /// Suggest up to `count` new destinations fitting the trip. The
    /// returned destinations carry fresh uuids and are ready to append
    /// to the trip's route.
    async fn suggest(&self, trip: &Trip, count: usize) -> Result<Vec<Destination>, AiError>;
}

// ============================================================================
// Gemini Implementation
// ============================================================================

/// Destination suggester backed by Gemini `generateContent`.
pub struct GeminiSuggester {
    client: HttpClient,
    api_key: String,
    model: String,
}

impl GeminiSuggester {
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL.to_string())
    }

    pub fn with_model(api_key: String, model: String) -> Self {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| HttpClient::new());

        Self {
            client,
            api_key,
            model,
        }
    }

    /// Build a suggester from the environment, failing fast when the key
    /// is absent.
    pub fn from_env() -> Result<Self, AiError> {
        match std::env::var(ENV_GEMINI_API_KEY) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(AiError::MissingApiKey(ENV_GEMINI_API_KEY.to_string())),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let url = format!(
            "{GEMINI_BASE_URL}/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!("Requesting suggestions from model {}", self.model);

        let response = self.client.post(url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::Provider(format!("HTTP {status} - {text}")));
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| AiError::Provider(format!("unreadable reply: {err}")))?;

        reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| AiError::Provider("reply carried no candidates".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

#[async_trait]
impl DestinationSuggesterTrait for GeminiSuggester {
    async fn suggest(&self, trip: &Trip, count: usize) -> Result<Vec<Destination>, AiError> {
        let prompt = build_suggestion_prompt(trip, count);
        let raw = self.generate(&prompt).await?;
        let suggestions = parse_suggestions(&raw)?;
        if suggestions.len() > count {
            warn!(
                "model returned {} suggestions, asked for {count}",
                suggestions.len()
            );
        }
        Ok(suggestions)
    }
}

// ============================================================================
// Prompt and Reply Handling
// ============================================================================

/// Prompt asking for a strict JSON array of suggested places.
pub fn build_suggestion_prompt(trip: &Trip, count: usize) -> String {
    let existing = if trip.destinations.is_empty() {
        "none yet".to_string()
    } else {
        trip.destinations
            .iter()
            .map(|destination| destination.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Suggest {count} additional places to visit for the trip \"{title}\".\n\
Already planned stops: {existing}.\n\
Do not repeat already planned stops.\n\
Reply with ONLY a JSON array, no prose and no markdown, where every \
element has exactly these fields:\n\
{{\"name\": string, \"lat\": number, \"lng\": number, \
\"type\": one of \"hotel\"|\"restaurant\"|\"attraction\"|\"transport\"|\"other\", \
\"notes\": short string}}",
        title = trip.title,
    )
}

/// Strip a wrapping markdown code fence (``` or ```json) from a reply.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Shape the model is asked to produce; ids are assigned locally.
#[derive(Debug, Deserialize)]
struct SuggestedPlace {
    name: String,
    lat: f64,
    lng: f64,
    #[serde(rename = "type", default)]
    kind: DestinationKind,
    #[serde(default)]
    notes: Option<String>,
}

/// Parse a model reply into destinations.
///
/// The whole reply must be one valid JSON array; any malformed element
/// fails the parse and the entire batch is rejected.
pub fn parse_suggestions(raw: &str) -> Result<Vec<Destination>, AiError> {
    let body = strip_code_fences(raw);
    let places: Vec<SuggestedPlace> =
        serde_json::from_str(body).map_err(|err| AiError::MalformedReply(err.to_string()))?;

    Ok(places
        .into_iter()
        .map(|place| Destination {
            id: Uuid::new_v4().to_string(),
            name: place.name,
            lat: place.lat,
            lng: place.lng,
            kind: place.kind,
            address: None,
            notes: place.notes,
            rating: None,
            estimated_cost: None,
            photos: None,
        })
        .collect())
}

// ============================================================================
// Fake Suggester for Testing
// ============================================================================

/// Deterministic suggester for tests: returns fixed destinations or a
/// fixed error.
pub struct FakeSuggester {
    pub destinations: Vec<Destination>,
    pub fail: bool,
}

impl FakeSuggester {
    pub fn with_destinations(destinations: Vec<Destination>) -> Self {
        Self {
            destinations,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            destinations: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl DestinationSuggesterTrait for FakeSuggester {
    async fn suggest(&self, _trip: &Trip, count: usize) -> Result<Vec<Destination>, AiError> {
        if self.fail {
            return Err(AiError::Provider("fake failure".to_string()));
        }
        Ok(self.destinations.iter().take(count).cloned().collect())
    }
}

// ============================================================================
// Tests
// ============================================================================
