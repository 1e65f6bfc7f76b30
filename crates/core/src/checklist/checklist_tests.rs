//! Tests for the checklist template and service seeding behavior.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::checklist::{
    completion_ratio, default_checklist_items, ChecklistItem, ChecklistRepositoryTrait,
    ChecklistService, ChecklistServiceTrait, NewChecklistItem,
};
use crate::errors::Result;
use crate::subscription::Subscription;

// =========================================================================
// In-memory checklist store
// =========================================================================

#[derive(Default)]
struct FakeChecklistRepository {
    items: Mutex<Vec<(String, ChecklistItem)>>,
    batch_calls: Mutex<Vec<(String, usize)>>,
}

impl FakeChecklistRepository {
    fn items_for(&self, trip_id: &str) -> Vec<ChecklistItem> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .filter(|(owner, _)| owner == trip_id)
            .map(|(_, item)| item.clone())
            .collect()
    }
}

#[async_trait]
impl ChecklistRepositoryTrait for FakeChecklistRepository {
    fn watch_items(&self, trip_id: &str) -> Subscription<Vec<ChecklistItem>> {
        let (_tx, rx) = watch::channel(self.items_for(trip_id));
        Subscription::from_receiver(rx)
    }

    async fn list_items(&self, trip_id: &str) -> Result<Vec<ChecklistItem>> {
        Ok(self.items_for(trip_id))
    }

    async fn insert_item(&self, trip_id: &str, item: NewChecklistItem) -> Result<String> {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.lock().unwrap().push((
            trip_id.to_string(),
            ChecklistItem {
                id: id.clone(),
                text: item.text,
                completed: item.completed,
                category: item.category,
                created_at: Some(chrono::Utc::now()),
            },
        ));
        Ok(id)
    }

    async fn set_completed(&self, trip_id: &str, item_id: &str, completed: bool) -> Result<()> {
        let mut items = self.items.lock().unwrap();
        for (owner, item) in items.iter_mut() {
            if owner == trip_id && item.id == item_id {
                item.completed = completed;
            }
        }
        Ok(())
    }

    async fn delete_item(&self, trip_id: &str, item_id: &str) -> Result<()> {
        self.items
            .lock()
            .unwrap()
            .retain(|(owner, item)| !(owner == trip_id && item.id == item_id));
        Ok(())
    }

    async fn insert_batch(&self, trip_id: &str, items: Vec<NewChecklistItem>) -> Result<usize> {
        let count = items.len();
        self.batch_calls
            .lock()
            .unwrap()
            .push((trip_id.to_string(), count));
        for item in items {
            self.insert_item(trip_id, item).await?;
        }
        Ok(count)
    }
}

// =========================================================================
// Template tests
// =========================================================================

#[test]
fn template_items_span_categories_and_start_incomplete() {
    let items = default_checklist_items();

    // The template is the comprehensive packing list: well within the
    // 10-70 item range the sparse revisions moved between.
    assert!(items.len() >= 10 && items.len() <= 70);
    assert!(items.iter().all(|item| !item.completed));
    assert!(items.iter().all(|item| item.category.is_some()));
    assert!(items.iter().all(|item| !item.text.is_empty()));

    let categories: BTreeSet<&str> = items
        .iter()
        .filter_map(|item| item.category.as_deref())
        .collect();
    assert_eq!(categories.len(), 5);
}

#[test]
fn template_has_no_duplicate_texts() {
    let items = default_checklist_items();
    let unique: BTreeSet<&str> = items.iter().map(|item| item.text.as_str()).collect();
    assert_eq!(unique.len(), items.len());
}

// =========================================================================
// Service tests
// =========================================================================

#[tokio::test]
async fn seed_defaults_writes_whole_template_in_one_batch() {
    let repository = Arc::new(FakeChecklistRepository::default());
    let svc = ChecklistService::new(repository.clone());

    let count = svc.seed_defaults("trip-1").await.unwrap();

    let batches = repository.batch_calls.lock().unwrap().clone();
    assert_eq!(batches, vec![("trip-1".to_string(), count)]);

    let items = repository.items_for("trip-1");
    assert_eq!(items.len(), default_checklist_items().len());
    assert!(items.iter().all(|item| !item.completed));
}

#[tokio::test]
async fn toggle_and_delete_round_trip() {
    let repository = Arc::new(FakeChecklistRepository::default());
    let svc = ChecklistService::new(repository.clone());

    let id = svc
        .add_item("trip-1", NewChecklistItem::new("Buy SIM card", "Errands"))
        .await
        .unwrap();

    svc.toggle_item("trip-1", &id, true).await.unwrap();
    assert!(repository.items_for("trip-1")[0].completed);

    svc.delete_item("trip-1", &id).await.unwrap();
    assert!(repository.items_for("trip-1").is_empty());
}

// =========================================================================
// completion_ratio
// =========================================================================

fn item(completed: bool) -> ChecklistItem {
    ChecklistItem {
        id: uuid::Uuid::new_v4().to_string(),
        text: "task".to_string(),
        completed,
        category: None,
        created_at: None,
    }
}

#[test]
fn completion_ratio_empty_is_zero() {
    assert_eq!(completion_ratio(&[]), 0.0);
}

#[test]
fn completion_ratio_counts_completed_share() {
    let items = vec![item(true), item(false), item(true), item(false)];
    assert_eq!(completion_ratio(&items), 50.0);
}
