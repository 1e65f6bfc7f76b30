//! Trip domain models.
//!
//! A trip embeds its ordered destination list inline; checklists and
//! budget items live in sub-collections and have their own modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a trip.
///
/// Core logic only branches on `Confirmed` (counted as a completed trip);
/// the other statuses exist in stored documents and are carried through
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    #[default]
    Planning,
    Active,
    Completed,
    Confirmed,
}

impl TripStatus {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, TripStatus::Confirmed)
    }
}

/// Category of a destination, stored as the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DestinationKind {
    Hotel,
    Restaurant,
    Attraction,
    Transport,
    #[default]
    Other,
}

/// A geocoded point on a trip's route.
///
/// Destinations have no independent lifecycle: each exists only embedded
/// in exactly one trip's `destinations` array. The id is either a provider
/// place id or a client-generated uuid.
///
/// Canonical coordinate fields are `lat`/`lng`; the partially-renamed
/// `latitude`/`longitude` document revision is not accepted.
///
/// Removal from a trip matches by deep value equality of the whole record
/// (see [`TripRepositoryTrait::remove_destination`]), so two destinations
/// with identical fields cannot be disambiguated for deletion. Known
/// legacy behavior, kept for store compatibility.
///
/// [`TripRepositoryTrait::remove_destination`]: super::TripRepositoryTrait::remove_destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type", default)]
    pub kind: DestinationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
}

/// Domain model representing a trip.
///
/// `budget` is a display-formatted currency string (e.g. "₪12,500");
/// arithmetic goes through [`crate::stats::parse_budget`]. `destinations`
/// order is display and route order: first entry is the route origin,
/// last is the route destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub dates: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub status: TripStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input model for creating a new trip. Carries no id: the store assigns
/// one. The creation timestamp is server-assigned on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub title: String,
    #[serde(default)]
    pub dates: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub status: TripStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
}

/// Partial field-level update for a trip. Only set fields are written;
/// the stored document is never replaced wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TripUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TripStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
}

impl TripUpdate {
    /// True when no field is set; services skip the write in that case.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.dates.is_none()
            && self.budget.is_none()
            && self.image.is_none()
            && self.status.is_none()
            && self.days.is_none()
    }

    /// Names of the set fields, in wire (camelCase) form. The storage
    /// layer uses these as the update mask.
    pub fn field_paths(&self) -> Vec<&'static str> {
        let mut paths = Vec::new();
        if self.title.is_some() {
            paths.push("title");
        }
        if self.dates.is_some() {
            paths.push("dates");
        }
        if self.budget.is_some() {
            paths.push("budget");
        }
        if self.image.is_some() {
            paths.push("image");
        }
        if self.status.is_some() {
            paths.push("status");
        }
        if self.days.is_some() {
            paths.push("days");
        }
        paths
    }
}
