use std::sync::Arc;

use crate::errors::Result;
use crate::stats::{budget_utilization, parse_budget, total_spent};
use crate::subscription::Subscription;
use crate::trips::Trip;

use super::budget_model::{BudgetItem, BudgetSummary, NewBudgetItem};
use super::budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};

/// Service for a trip's expense tracking.
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        BudgetService { repository }
    }
}

/// Fold a trip and its recorded items into the aggregate budget view.
///
/// The total budget comes from digit-stripping the trip's display budget
/// string; see [`parse_budget`] for the exact (lossy) rule.
pub fn summarize(trip: &Trip, items: &[BudgetItem]) -> BudgetSummary {
    let total_budget = parse_budget(&trip.budget);
    let spent = total_spent(items);
    BudgetSummary {
        total_budget,
        total_spent: spent,
        remaining: total_budget as f64 - spent,
        utilization: budget_utilization(spent, total_budget),
    }
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    fn subscribe_items(&self, trip_id: &str) -> Subscription<Vec<BudgetItem>> {
        self.repository.watch_items(trip_id)
    }

    async fn add_item(&self, trip_id: &str, item: NewBudgetItem) -> Result<String> {
        self.repository.insert_item(trip_id, item).await
    }

    async fn update_item(&self, trip_id: &str, item_id: &str, item: NewBudgetItem) -> Result<()> {
        self.repository.update_item(trip_id, item_id, item).await
    }

    async fn delete_item(&self, trip_id: &str, item_id: &str) -> Result<()> {
        self.repository.delete_item(trip_id, item_id).await
    }
}
