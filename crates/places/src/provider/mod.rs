//! Provider abstraction for destination search and routing.

pub mod google;

use async_trait::async_trait;
use tripdeck_core::trips::Destination;

use crate::errors::PlacesError;
use crate::models::RouteSummary;

/// A map backend that can find places and route between them.
#[async_trait]
pub trait DestinationProvider: Send + Sync {
    /// Stable identifier for logging.
    fn id(&self) -> &'static str;

    /// Free-text place search, mapped into ready-to-add destinations.
    /// An unknown query yields an empty list, not an error.
    async fn search(&self, query: &str) -> Result<Vec<Destination>, PlacesError>;

    /// Route through the stops in the given order: first stop is the
    /// origin, last is the final destination, everything between is a
    /// waypoint. Needs at least two stops.
    async fn route(&self, stops: &[Destination]) -> Result<RouteSummary, PlacesError>;
}
