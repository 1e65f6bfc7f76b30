//! Firestore-backed checklist repository.
//!
//! Items live in the `trips/{tripId}/checklist` sub-collection and are
//! ordered by creation time ascending, so template seeding order is also
//! display order.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use uuid::Uuid;

use tripdeck_core::checklist::{ChecklistItem, ChecklistRepositoryTrait, NewChecklistItem};
use tripdeck_core::constants::{CHECKLIST_COLLECTION, TRIPS_COLLECTION};
use tripdeck_core::errors::{Result, StoreError};
use tripdeck_core::subscription::Subscription;

use crate::client::FirestoreClient;
use crate::errors::StorageError;
use crate::value::{decode_document, encode_fields};
use crate::watch::{spawn_poll_watch, DEFAULT_POLL_INTERVAL};

pub struct ChecklistRepository {
    client: Arc<FirestoreClient>,
    poll_interval: Duration,
}

impl ChecklistRepository {
    pub fn new(client: Arc<FirestoreClient>) -> Self {
        Self::with_poll_interval(client, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_poll_interval(client: Arc<FirestoreClient>, poll_interval: Duration) -> Self {
        ChecklistRepository {
            client,
            poll_interval,
        }
    }

    fn collection_path(trip_id: &str) -> String {
        format!("{TRIPS_COLLECTION}/{trip_id}/{CHECKLIST_COLLECTION}")
    }

    fn doc_path(trip_id: &str, item_id: &str) -> String {
        format!("{}/{item_id}", Self::collection_path(trip_id))
    }

    async fn fetch_all(
        client: &FirestoreClient,
        trip_id: &str,
    ) -> std::result::Result<Vec<ChecklistItem>, StorageError> {
        let documents = client
            .list_documents(&Self::collection_path(trip_id))
            .await?;
        let mut items: Vec<ChecklistItem> = documents
            .iter()
            .map(decode_document)
            .collect::<std::result::Result<_, _>>()?;
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(items)
    }

    /// Commit write creating one item under a fresh uuid id.
    fn insert_write(
        &self,
        trip_id: &str,
        item: &NewChecklistItem,
    ) -> std::result::Result<Value, StorageError> {
        let item_id = Uuid::new_v4().to_string();
        let fields = encode_fields(item)?;
        Ok(json!({
            "update": {
                "name": self.client.document_name(&Self::doc_path(trip_id, &item_id)),
                "fields": fields,
            },
            "currentDocument": { "exists": false },
            "updateTransforms": [
                { "fieldPath": "createdAt", "setToServerValue": "REQUEST_TIME" }
            ],
        }))
    }
}

#[async_trait]
impl ChecklistRepositoryTrait for ChecklistRepository {
    fn watch_items(&self, trip_id: &str) -> Subscription<Vec<ChecklistItem>> {
        let client = self.client.clone();
        let trip_id = trip_id.to_string();
        spawn_poll_watch(Vec::new(), Vec::new(), self.poll_interval, move || {
            let client = client.clone();
            let trip_id = trip_id.clone();
            async move { Self::fetch_all(&client, &trip_id).await }
        })
    }

    async fn list_items(&self, trip_id: &str) -> Result<Vec<ChecklistItem>> {
        Ok(Self::fetch_all(&self.client, trip_id).await?)
    }

    async fn insert_item(&self, trip_id: &str, item: NewChecklistItem) -> Result<String> {
        let write = self.insert_write(trip_id, &item)?;
        let item_id = document_id_of(&write);
        self.client.commit(vec![write]).await?;
        Ok(item_id)
    }

    async fn set_completed(&self, trip_id: &str, item_id: &str, completed: bool) -> Result<()> {
        let fields = json!({ "completed": { "booleanValue": completed } });
        self.client
            .patch_document(&Self::doc_path(trip_id, item_id), fields, &["completed"])
            .await?;
        Ok(())
    }

    async fn delete_item(&self, trip_id: &str, item_id: &str) -> Result<()> {
        self.client
            .delete_document(&Self::doc_path(trip_id, item_id))
            .await?;
        Ok(())
    }

    async fn insert_batch(&self, trip_id: &str, items: Vec<NewChecklistItem>) -> Result<usize> {
        if items.is_empty() {
            return Ok(0);
        }
        let count = items.len();
        let writes = items
            .iter()
            .map(|item| self.insert_write(trip_id, item))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|err| StoreError::BatchFailed(err.to_string()))?;
        self.client
            .commit(writes)
            .await
            .map_err(|err| StoreError::BatchFailed(err.to_string()))?;
        Ok(count)
    }
}

/// Tail segment of a commit write's target document name.
fn document_id_of(write: &Value) -> String {
    write["update"]["name"]
        .as_str()
        .and_then(|name| name.rsplit('/').next())
        .unwrap_or_default()
        .to_string()
}
