//! Budget domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Spending category of a budget item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Transport,
    Accommodation,
    Food,
    Activities,
    Shopping,
    #[default]
    Other,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 6] = [
        BudgetCategory::Transport,
        BudgetCategory::Accommodation,
        BudgetCategory::Food,
        BudgetCategory::Activities,
        BudgetCategory::Shopping,
        BudgetCategory::Other,
    ];
}

/// An expense recorded against one trip's budget.
///
/// `amount` is currency-unit-less; `date` is an ISO date string
/// (YYYY-MM-DD) and is what budget lists sort on, descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: String,
    #[serde(default)]
    pub category: BudgetCategory,
    pub title: String,
    pub amount: f64,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Input model for creating or overwriting a budget item's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetItem {
    #[serde(default)]
    pub category: BudgetCategory,
    pub title: String,
    pub amount: f64,
    pub date: String,
}

/// Aggregate view of a trip's budget, derived from the trip's budget
/// string and its recorded items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Parsed from the trip's display budget string; 0 when the string
    /// has no digits.
    pub total_budget: i64,
    pub total_spent: f64,
    pub remaining: f64,
    /// Percentage spent, unclamped: values over 100 signal overspend.
    /// Clamping to [0, 100] for a progress bar is the display's concern.
    pub utilization: f64,
}
