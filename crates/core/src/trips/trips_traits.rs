use crate::errors::Result;
use crate::subscription::Subscription;
use crate::trips::trips_model::{Destination, NewTrip, Trip, TripUpdate};
use async_trait::async_trait;

/// Trait for trip store operations (the remote store gateway side).
///
/// Implementations are injected into services; there is no module-level
/// store singleton.
#[async_trait]
pub trait TripRepositoryTrait: Send + Sync {
    /// Open a live snapshot subscription on the trips collection.
    ///
    /// On a subscription error the watch emits an empty list, logs the
    /// condition and stops; there is no automatic retry.
    fn watch_trips(&self) -> Subscription<Vec<Trip>>;

    async fn list_trips(&self) -> Result<Vec<Trip>>;
    async fn get_trip(&self, trip_id: &str) -> Result<Trip>;

    /// Insert a new trip document with a server-assigned creation
    /// timestamp and return the assigned id.
    async fn insert_trip(&self, new_trip: NewTrip) -> Result<String>;

    /// Field-mask merge write; never replaces the whole document.
    async fn update_trip(&self, trip_id: &str, update: TripUpdate) -> Result<()>;

    /// Destructive. Does not cascade: checklist and budget sub-documents
    /// of the trip are left orphaned.
    async fn delete_trip(&self, trip_id: &str) -> Result<()>;

    /// Atomic array-union of the destination into the trip's
    /// `destinations` field. A value already present is not duplicated.
    async fn add_destination(&self, trip_id: &str, destination: Destination) -> Result<()>;

    /// Atomic array-removal matching by deep value equality of the whole
    /// record. A destination that differs from the stored one in any
    /// field leaves the array unchanged.
    async fn remove_destination(&self, trip_id: &str, destination: Destination) -> Result<()>;
}

/// Trait for trip service operations (what the UI talks to).
#[async_trait]
pub trait TripServiceTrait: Send + Sync {
    fn subscribe_trips(&self) -> Subscription<Vec<Trip>>;

    /// Create a trip and seed its default checklist in the same call.
    /// Returns the assigned trip id.
    async fn create_trip(&self, new_trip: NewTrip) -> Result<String>;

    /// Parse a user-supplied JSON file as a [`NewTrip`] and create it.
    /// The whole import is rejected on parse failure or when the payload
    /// carries an `id` field.
    async fn import_trip(&self, json: &str) -> Result<String>;

    async fn update_trip(&self, trip_id: &str, update: TripUpdate) -> Result<()>;

    /// Destructive; the UI obtains explicit user confirmation before
    /// calling this. The API itself performs no confirmation.
    async fn delete_trip(&self, trip_id: &str) -> Result<()>;

    async fn add_destination(&self, trip_id: &str, destination: Destination) -> Result<()>;
    async fn remove_destination(&self, trip_id: &str, destination: Destination) -> Result<()>;
}
