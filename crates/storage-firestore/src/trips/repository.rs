//! Firestore-backed trip repository.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use tripdeck_core::constants::TRIPS_COLLECTION;
use tripdeck_core::errors::{Result, StoreError};
use tripdeck_core::subscription::Subscription;
use tripdeck_core::trips::{Destination, NewTrip, Trip, TripRepositoryTrait, TripUpdate};

use crate::client::FirestoreClient;
use crate::errors::StorageError;
use crate::value::{decode_document, encode_fields, encode_model};
use crate::watch::{spawn_poll_watch, DEFAULT_POLL_INTERVAL};

pub struct TripRepository {
    client: Arc<FirestoreClient>,
    poll_interval: Duration,
}

impl TripRepository {
    pub fn new(client: Arc<FirestoreClient>) -> Self {
        Self::with_poll_interval(client, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_poll_interval(client: Arc<FirestoreClient>, poll_interval: Duration) -> Self {
        TripRepository {
            client,
            poll_interval,
        }
    }

    fn doc_path(trip_id: &str) -> String {
        format!("{TRIPS_COLLECTION}/{trip_id}")
    }

    async fn fetch_all(client: &FirestoreClient) -> std::result::Result<Vec<Trip>, StorageError> {
        let documents = client.list_documents(TRIPS_COLLECTION).await?;
        documents.iter().map(decode_document).collect()
    }

    /// One transform-only write against the `destinations` array.
    async fn transform_destinations(
        &self,
        trip_id: &str,
        transform_kind: &str,
        destination: Destination,
    ) -> Result<()> {
        let element = encode_model(&destination)?;
        let write = json!({
            "transform": {
                "document": self.client.document_name(&Self::doc_path(trip_id)),
                "fieldTransforms": [
                    {
                        "fieldPath": "destinations",
                        (transform_kind): { "values": [element] },
                    }
                ],
            },
        });
        self.client.commit(vec![write]).await?;
        Ok(())
    }
}

#[async_trait]
impl TripRepositoryTrait for TripRepository {
    fn watch_trips(&self) -> Subscription<Vec<Trip>> {
        let client = self.client.clone();
        spawn_poll_watch(Vec::new(), Vec::new(), self.poll_interval, move || {
            let client = client.clone();
            async move { Self::fetch_all(&client).await }
        })
    }

    async fn list_trips(&self) -> Result<Vec<Trip>> {
        Ok(Self::fetch_all(&self.client).await?)
    }

    async fn get_trip(&self, trip_id: &str) -> Result<Trip> {
        let path = Self::doc_path(trip_id);
        match self.client.get_document(&path).await? {
            Some(document) => Ok(decode_document(&document)?),
            None => Err(StoreError::NotFound(path).into()),
        }
    }

    async fn insert_trip(&self, new_trip: NewTrip) -> Result<String> {
        let trip_id = Uuid::new_v4().to_string();
        let fields = encode_fields(&new_trip)?;
        let write = json!({
            "update": {
                "name": self.client.document_name(&Self::doc_path(&trip_id)),
                "fields": fields,
            },
            "currentDocument": { "exists": false },
            "updateTransforms": [
                { "fieldPath": "createdAt", "setToServerValue": "REQUEST_TIME" }
            ],
        });
        self.client.commit(vec![write]).await?;
        Ok(trip_id)
    }

    async fn update_trip(&self, trip_id: &str, update: TripUpdate) -> Result<()> {
        let fields = encode_fields(&update)?;
        let write = json!({
            "update": {
                "name": self.client.document_name(&Self::doc_path(trip_id)),
                "fields": fields,
            },
            "updateMask": { "fieldPaths": update.field_paths() },
            "currentDocument": { "exists": true },
            "updateTransforms": [
                { "fieldPath": "updatedAt", "setToServerValue": "REQUEST_TIME" }
            ],
        });
        self.client.commit(vec![write]).await?;
        Ok(())
    }

    async fn delete_trip(&self, trip_id: &str) -> Result<()> {
        self.client.delete_document(&Self::doc_path(trip_id)).await?;
        Ok(())
    }

    async fn add_destination(&self, trip_id: &str, destination: Destination) -> Result<()> {
        self.transform_destinations(trip_id, "appendMissingElements", destination)
            .await
    }

    async fn remove_destination(&self, trip_id: &str, destination: Destination) -> Result<()> {
        self.transform_destinations(trip_id, "removeAllFromArray", destination)
            .await
    }
}
