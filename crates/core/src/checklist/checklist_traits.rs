use crate::checklist::checklist_model::{ChecklistItem, NewChecklistItem};
use crate::errors::Result;
use crate::subscription::Subscription;
use async_trait::async_trait;

/// Trait for checklist store operations on a trip's `checklist`
/// sub-collection.
#[async_trait]
pub trait ChecklistRepositoryTrait: Send + Sync {
    /// Live snapshot subscription on a trip's checklist, ordered by
    /// creation time ascending.
    fn watch_items(&self, trip_id: &str) -> Subscription<Vec<ChecklistItem>>;

    async fn list_items(&self, trip_id: &str) -> Result<Vec<ChecklistItem>>;
    async fn insert_item(&self, trip_id: &str, item: NewChecklistItem) -> Result<String>;
    async fn set_completed(&self, trip_id: &str, item_id: &str, completed: bool) -> Result<()>;
    async fn delete_item(&self, trip_id: &str, item_id: &str) -> Result<()>;

    /// Write all items in one atomic batch: either every item lands or
    /// none does.
    async fn insert_batch(&self, trip_id: &str, items: Vec<NewChecklistItem>) -> Result<usize>;
}

/// Trait for checklist service operations.
#[async_trait]
pub trait ChecklistServiceTrait: Send + Sync {
    fn subscribe_items(&self, trip_id: &str) -> Subscription<Vec<ChecklistItem>>;
    async fn add_item(&self, trip_id: &str, item: NewChecklistItem) -> Result<String>;
    async fn toggle_item(&self, trip_id: &str, item_id: &str, completed: bool) -> Result<()>;
    async fn delete_item(&self, trip_id: &str, item_id: &str) -> Result<()>;

    /// Seed the default packing template into a freshly created trip.
    /// Called exactly once at trip creation by the trip service.
    async fn seed_defaults(&self, trip_id: &str) -> Result<usize>;
}
