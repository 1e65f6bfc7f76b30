//! Google Maps destination provider.
//!
//! Two endpoints are used:
//! - Places text search (`/maps/api/place/textsearch/json`) for free-text
//!   destination lookup
//! - Directions (`/maps/api/directions/json`) for routing over a trip's
//!   stops, driving mode, waypoints in stored order (no optimization)
//!
//! Both answer HTTP 200 with an application-level `status` field;
//! anything other than `OK`/`ZERO_RESULTS` is surfaced as an error.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use tripdeck_core::trips::{Destination, DestinationKind};

use crate::errors::PlacesError;
use crate::models::{RouteLeg, RouteSummary};
use crate::provider::DestinationProvider;

const BASE_URL: &str = "https://maps.googleapis.com/maps/api";
const PROVIDER_ID: &str = "GOOGLE_MAPS";
const PHOTO_MAX_WIDTH: u32 = 400;

/// Environment variable holding the Google Maps API key.
pub const ENV_MAPS_API_KEY: &str = "TRIPDECK_MAPS_API_KEY";

// ============================================================================
// API Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    place_id: String,
    name: String,
    geometry: Geometry,
    #[serde(default)]
    formatted_address: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    photos: Vec<PlacePhoto>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct PlacePhoto {
    photo_reference: String,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    distance: TextValue,
    duration: TextValue,
    #[serde(default)]
    start_address: String,
    #[serde(default)]
    end_address: String,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
    value: i64,
}

// ============================================================================
// GoogleMapsProvider
// ============================================================================

pub struct GoogleMapsProvider {
    client: Client,
    api_key: String,
}

impl GoogleMapsProvider {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// Build a provider from the environment, failing fast when the key
    /// is absent.
    pub fn from_env() -> Result<Self, PlacesError> {
        match std::env::var(ENV_MAPS_API_KEY) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(PlacesError::MissingApiKey(ENV_MAPS_API_KEY.to_string())),
        }
    }

    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, PlacesError> {
        let url = format!("{BASE_URL}{endpoint}");

        let mut request = self.client.get(&url).query(&[("key", &self.api_key)]);
        for (key, value) in params {
            request = request.query(&[(key, value)]);
        }

        debug!("Google Maps request: {} with {} params", endpoint, params.len());

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }

    fn photo_url(&self, reference: &str) -> String {
        format!(
            "{BASE_URL}/place/photo?maxwidth={PHOTO_MAX_WIDTH}&photo_reference={}&key={}",
            urlencoding::encode(reference),
            self.api_key
        )
    }

    fn place_to_destination(&self, place: PlaceResult) -> Destination {
        let photos: Vec<String> = place
            .photos
            .iter()
            .map(|photo| self.photo_url(&photo.photo_reference))
            .collect();

        Destination {
            id: place.place_id,
            name: place.name,
            lat: place.geometry.location.lat,
            lng: place.geometry.location.lng,
            kind: determine_kind(&place.types),
            address: place.formatted_address,
            notes: None,
            rating: place.rating,
            estimated_cost: None,
            photos: if photos.is_empty() { None } else { Some(photos) },
        }
    }
}

#[async_trait]
impl DestinationProvider for GoogleMapsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn search(&self, query: &str) -> Result<Vec<Destination>, PlacesError> {
        let text = self
            .fetch("/place/textsearch/json", &[("query", query)])
            .await?;

        let response: TextSearchResponse = serde_json::from_str(&text)
            .map_err(|err| PlacesError::ParseFailed(err.to_string()))?;

        match response.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Ok(Vec::new()),
            other => {
                return Err(PlacesError::Status {
                    status: other.to_string(),
                    message: response.error_message.unwrap_or_default(),
                })
            }
        }

        let destinations: Vec<Destination> = response
            .results
            .into_iter()
            .map(|place| self.place_to_destination(place))
            .collect();

        debug!("Google Maps: {} results for '{}'", destinations.len(), query);
        Ok(destinations)
    }

    async fn route(&self, stops: &[Destination]) -> Result<RouteSummary, PlacesError> {
        if stops.len() < 2 {
            return Err(PlacesError::RouteFailed(
                "a route needs at least two destinations".to_string(),
            ));
        }

        let origin = coordinate_param(&stops[0]);
        let destination = coordinate_param(&stops[stops.len() - 1]);
        let waypoints = waypoints_param(&stops[1..stops.len() - 1]);

        let mut params = vec![
            ("origin", origin.as_str()),
            ("destination", destination.as_str()),
            ("mode", "driving"),
        ];
        if !waypoints.is_empty() {
            params.push(("waypoints", waypoints.as_str()));
        }

        let text = self.fetch("/directions/json", &params).await?;

        let response: DirectionsResponse = serde_json::from_str(&text)
            .map_err(|err| PlacesError::ParseFailed(err.to_string()))?;

        match response.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" | "NOT_FOUND" => {
                return Err(PlacesError::RouteFailed(
                    "no route between the given destinations".to_string(),
                ))
            }
            other => {
                return Err(PlacesError::Status {
                    status: other.to_string(),
                    message: response.error_message.unwrap_or_default(),
                })
            }
        }

        let route = response
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| PlacesError::RouteFailed("empty routes array".to_string()))?;

        Ok(summarize_route(stops, route.legs))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Map a place's type tags to a destination category.
///
/// First match wins: lodging, then food, then transit hubs; everything
/// else counts as an attraction.
fn determine_kind(types: &[String]) -> DestinationKind {
    let has = |tag: &str| types.iter().any(|t| t == tag);
    if has("lodging") {
        DestinationKind::Hotel
    } else if has("restaurant") || has("food") {
        DestinationKind::Restaurant
    } else if has("transit_station") || has("bus_station") {
        DestinationKind::Transport
    } else {
        DestinationKind::Attraction
    }
}

fn coordinate_param(stop: &Destination) -> String {
    format!("{},{}", stop.lat, stop.lng)
}

/// Pipe-separated waypoint list, preserving stop order.
fn waypoints_param(stops: &[Destination]) -> String {
    stops
        .iter()
        .map(coordinate_param)
        .collect::<Vec<_>>()
        .join("|")
}

/// Pair directions legs with the stop names they connect. Leg addresses
/// from the provider are kept only as a fallback when the stop list and
/// leg list disagree in length.
fn summarize_route(stops: &[Destination], legs: Vec<DirectionsLeg>) -> RouteSummary {
    let route_legs = legs
        .into_iter()
        .enumerate()
        .map(|(i, leg)| {
            let from = stops
                .get(i)
                .map(|stop| stop.name.clone())
                .unwrap_or(leg.start_address);
            let to = stops
                .get(i + 1)
                .map(|stop| stop.name.clone())
                .unwrap_or(leg.end_address);
            RouteLeg {
                from,
                to,
                distance_meters: leg.distance.value,
                duration_seconds: leg.duration.value,
                distance_text: leg.distance.text,
                duration_text: leg.duration.text,
            }
        })
        .collect();
    RouteSummary::from_legs(route_legs)
}

// ============================================================================
// Tests
// ============================================================================
