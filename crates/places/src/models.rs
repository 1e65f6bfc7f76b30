//! Routing result models.

use serde::Serialize;

/// One leg of a computed route, between two consecutive destinations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub distance_meters: i64,
    pub duration_seconds: i64,
    /// Human-readable figures as the provider formatted them
    /// (e.g. "12.4 km", "23 mins").
    pub distance_text: String,
    pub duration_text: String,
}

/// A route over a trip's destinations, in their stored order.
///
/// Stop order is taken as-is: the first destination is the origin, the
/// last is the final stop. No reordering or optimization is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub legs: Vec<RouteLeg>,
    pub total_distance_meters: i64,
    pub total_duration_seconds: i64,
}

impl RouteSummary {
    /// Build a summary from legs, totalling distance and duration.
    pub fn from_legs(legs: Vec<RouteLeg>) -> Self {
        let total_distance_meters = legs.iter().map(|leg| leg.distance_meters).sum();
        let total_duration_seconds = legs.iter().map(|leg| leg.duration_seconds).sum();
        RouteSummary {
            legs,
            total_distance_meters,
            total_duration_seconds,
        }
    }
}
