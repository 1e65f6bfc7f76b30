use std::sync::Arc;

use log::debug;

use crate::errors::Result;
use crate::subscription::Subscription;

use super::checklist_model::{ChecklistItem, NewChecklistItem};
use super::checklist_template::default_checklist_items;
use super::checklist_traits::{ChecklistRepositoryTrait, ChecklistServiceTrait};

/// Service for a trip's packing/preparation checklist.
pub struct ChecklistService {
    repository: Arc<dyn ChecklistRepositoryTrait>,
}

impl ChecklistService {
    pub fn new(repository: Arc<dyn ChecklistRepositoryTrait>) -> Self {
        ChecklistService { repository }
    }
}

/// Fraction of completed items as a percentage in [0, 100].
/// An empty list reports 0.
pub fn completion_ratio(items: &[ChecklistItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let completed = items.iter().filter(|item| item.completed).count();
    completed as f64 / items.len() as f64 * 100.0
}

#[async_trait::async_trait]
impl ChecklistServiceTrait for ChecklistService {
    fn subscribe_items(&self, trip_id: &str) -> Subscription<Vec<ChecklistItem>> {
        self.repository.watch_items(trip_id)
    }

    async fn add_item(&self, trip_id: &str, item: NewChecklistItem) -> Result<String> {
        self.repository.insert_item(trip_id, item).await
    }

    async fn toggle_item(&self, trip_id: &str, item_id: &str, completed: bool) -> Result<()> {
        self.repository
            .set_completed(trip_id, item_id, completed)
            .await
    }

    async fn delete_item(&self, trip_id: &str, item_id: &str) -> Result<()> {
        self.repository.delete_item(trip_id, item_id).await
    }

    async fn seed_defaults(&self, trip_id: &str) -> Result<usize> {
        let items = default_checklist_items();
        let count = self.repository.insert_batch(trip_id, items).await?;
        debug!("Seeded {} default checklist items for trip {}", count, trip_id);
        Ok(count)
    }
}
