//! Checklist domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A packing/preparation task owned by one trip.
///
/// `category` is a free-text grouping label for display, not the budget
/// category enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Input model for creating a checklist item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChecklistItem {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NewChecklistItem {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        NewChecklistItem {
            text: text.into(),
            completed: false,
            category: Some(category.into()),
        }
    }
}
