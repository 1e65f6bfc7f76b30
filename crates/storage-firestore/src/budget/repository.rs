//! Firestore-backed budget repository.
//!
//! Items live in the `trips/{tripId}/budgetItems` sub-collection and are
//! sorted by expense date descending, newest spending first.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use tripdeck_core::budget::{BudgetItem, BudgetRepositoryTrait, NewBudgetItem};
use tripdeck_core::constants::{BUDGET_ITEMS_COLLECTION, TRIPS_COLLECTION};
use tripdeck_core::errors::Result;
use tripdeck_core::subscription::Subscription;

use crate::client::FirestoreClient;
use crate::errors::StorageError;
use crate::value::{decode_document, encode_fields};
use crate::watch::{spawn_poll_watch, DEFAULT_POLL_INTERVAL};

const EDITABLE_FIELDS: [&str; 4] = ["category", "title", "amount", "date"];

pub struct BudgetRepository {
    client: Arc<FirestoreClient>,
    poll_interval: Duration,
}

impl BudgetRepository {
    pub fn new(client: Arc<FirestoreClient>) -> Self {
        Self::with_poll_interval(client, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_poll_interval(client: Arc<FirestoreClient>, poll_interval: Duration) -> Self {
        BudgetRepository {
            client,
            poll_interval,
        }
    }

    fn collection_path(trip_id: &str) -> String {
        format!("{TRIPS_COLLECTION}/{trip_id}/{BUDGET_ITEMS_COLLECTION}")
    }

    fn doc_path(trip_id: &str, item_id: &str) -> String {
        format!("{}/{item_id}", Self::collection_path(trip_id))
    }

    async fn fetch_all(
        client: &FirestoreClient,
        trip_id: &str,
    ) -> std::result::Result<Vec<BudgetItem>, StorageError> {
        let documents = client
            .list_documents(&Self::collection_path(trip_id))
            .await?;
        let mut items: Vec<BudgetItem> = documents
            .iter()
            .map(decode_document)
            .collect::<std::result::Result<_, _>>()?;
        // ISO dates compare correctly as strings.
        items.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(items)
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn watch_items(&self, trip_id: &str) -> Subscription<Vec<BudgetItem>> {
        let client = self.client.clone();
        let trip_id = trip_id.to_string();
        spawn_poll_watch(Vec::new(), Vec::new(), self.poll_interval, move || {
            let client = client.clone();
            let trip_id = trip_id.clone();
            async move { Self::fetch_all(&client, &trip_id).await }
        })
    }

    async fn list_items(&self, trip_id: &str) -> Result<Vec<BudgetItem>> {
        Ok(Self::fetch_all(&self.client, trip_id).await?)
    }

    async fn insert_item(&self, trip_id: &str, item: NewBudgetItem) -> Result<String> {
        let item_id = Uuid::new_v4().to_string();
        let fields = encode_fields(&item)?;
        let write = json!({
            "update": {
                "name": self.client.document_name(&Self::doc_path(trip_id, &item_id)),
                "fields": fields,
            },
            "currentDocument": { "exists": false },
            "updateTransforms": [
                { "fieldPath": "createdAt", "setToServerValue": "REQUEST_TIME" }
            ],
        });
        self.client.commit(vec![write]).await?;
        Ok(item_id)
    }

    async fn update_item(&self, trip_id: &str, item_id: &str, item: NewBudgetItem) -> Result<()> {
        let fields = encode_fields(&item)?;
        self.client
            .patch_document(&Self::doc_path(trip_id, item_id), fields, &EDITABLE_FIELDS)
            .await?;
        Ok(())
    }

    async fn delete_item(&self, trip_id: &str, item_id: &str) -> Result<()> {
        self.client
            .delete_document(&Self::doc_path(trip_id, item_id))
            .await?;
        Ok(())
    }
}
