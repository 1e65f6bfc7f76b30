use crate::budget::budget_model::{BudgetItem, NewBudgetItem};
use crate::errors::Result;
use crate::subscription::Subscription;
use async_trait::async_trait;

/// Trait for budget store operations on a trip's `budgetItems`
/// sub-collection.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Live snapshot subscription on a trip's budget items, sorted
    /// descending by date.
    fn watch_items(&self, trip_id: &str) -> Subscription<Vec<BudgetItem>>;

    async fn list_items(&self, trip_id: &str) -> Result<Vec<BudgetItem>>;
    async fn insert_item(&self, trip_id: &str, item: NewBudgetItem) -> Result<String>;

    /// Overwrites all user-editable fields of the item.
    async fn update_item(&self, trip_id: &str, item_id: &str, item: NewBudgetItem) -> Result<()>;

    async fn delete_item(&self, trip_id: &str, item_id: &str) -> Result<()>;
}

/// Trait for budget service operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn subscribe_items(&self, trip_id: &str) -> Subscription<Vec<BudgetItem>>;
    async fn add_item(&self, trip_id: &str, item: NewBudgetItem) -> Result<String>;
    async fn update_item(&self, trip_id: &str, item_id: &str, item: NewBudgetItem) -> Result<()>;
    async fn delete_item(&self, trip_id: &str, item_id: &str) -> Result<()>;
}
