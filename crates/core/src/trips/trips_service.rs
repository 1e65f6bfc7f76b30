use std::sync::Arc;

use log::{debug, error};
use rand::seq::SliceRandom;

use crate::checklist::ChecklistServiceTrait;
use crate::constants::DEFAULT_COVER_IMAGES;
use crate::errors::{Error, Result};
use crate::subscription::Subscription;

use super::trips_model::{Destination, NewTrip, Trip, TripUpdate};
use super::trips_traits::{TripRepositoryTrait, TripServiceTrait};

/// Service mediating all trip reads and writes.
///
/// The UI is purely reactive to the trips subscription: a failed write
/// never manifests locally, the last remote-confirmed snapshot keeps
/// rendering. There is no optimistic local state to roll back.
pub struct TripService {
    repository: Arc<dyn TripRepositoryTrait>,
    checklist_service: Arc<dyn ChecklistServiceTrait>,
}

impl TripService {
    pub fn new(
        repository: Arc<dyn TripRepositoryTrait>,
        checklist_service: Arc<dyn ChecklistServiceTrait>,
    ) -> Self {
        TripService {
            repository,
            checklist_service,
        }
    }

    fn pick_cover_image() -> String {
        DEFAULT_COVER_IMAGES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(DEFAULT_COVER_IMAGES[0])
            .to_string()
    }
}

#[async_trait::async_trait]
impl TripServiceTrait for TripService {
    fn subscribe_trips(&self) -> Subscription<Vec<Trip>> {
        self.repository.watch_trips()
    }

    async fn create_trip(&self, mut new_trip: NewTrip) -> Result<String> {
        if new_trip.image.is_none() {
            new_trip.image = Some(Self::pick_cover_image());
        }

        let trip_id = self.repository.insert_trip(new_trip).await?;
        debug!("Created trip {}", trip_id);

        // Seeding happens exactly once, here at creation, rather than
        // reactively on an observed-empty checklist snapshot. The batch
        // is atomic so the checklist never appears partially populated.
        if let Err(e) = self.checklist_service.seed_defaults(&trip_id).await {
            error!("Failed to seed default checklist for trip {}: {}", trip_id, e);
            return Err(e);
        }

        Ok(trip_id)
    }

    async fn import_trip(&self, json: &str) -> Result<String> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| Error::Import(e.to_string()))?;

        // The store assigns ids; an imported payload must not carry one.
        if value.get("id").is_some() {
            return Err(Error::Import(
                "imported trip must not include an 'id' field".to_string(),
            ));
        }

        let new_trip: NewTrip =
            serde_json::from_value(value).map_err(|e| Error::Import(e.to_string()))?;

        self.create_trip(new_trip).await
    }

    async fn update_trip(&self, trip_id: &str, update: TripUpdate) -> Result<()> {
        if update.is_empty() {
            return Ok(());
        }
        self.repository.update_trip(trip_id, update).await
    }

    async fn delete_trip(&self, trip_id: &str) -> Result<()> {
        // No cascade: checklist and budget sub-documents are orphaned.
        self.repository.delete_trip(trip_id).await
    }

    async fn add_destination(&self, trip_id: &str, destination: Destination) -> Result<()> {
        self.repository.add_destination(trip_id, destination).await
    }

    async fn remove_destination(&self, trip_id: &str, destination: Destination) -> Result<()> {
        self.repository
            .remove_destination(trip_id, destination)
            .await
    }
}
