//! Tests for budget models and the aggregate summary.

use crate::budget::{summarize, BudgetCategory, BudgetItem};
use crate::trips::{Trip, TripStatus};

fn trip_with_budget(budget: &str) -> Trip {
    Trip {
        id: "t1".to_string(),
        title: "NYC".to_string(),
        dates: String::new(),
        budget: budget.to_string(),
        image: None,
        status: TripStatus::Planning,
        days: None,
        destinations: vec![],
        created_at: None,
        updated_at: None,
    }
}

fn item(category: BudgetCategory, amount: f64, date: &str) -> BudgetItem {
    BudgetItem {
        id: uuid::Uuid::new_v4().to_string(),
        category,
        title: "expense".to_string(),
        amount,
        date: date.to_string(),
        created_at: None,
    }
}

#[test]
fn summary_of_partially_spent_budget() {
    let trip = trip_with_budget("₪10,000");
    let items = vec![
        item(BudgetCategory::Accommodation, 3000.0, "2025-06-02"),
        item(BudgetCategory::Food, 1000.0, "2025-06-03"),
        item(BudgetCategory::Transport, 500.0, "2025-06-01"),
    ];

    let summary = summarize(&trip, &items);
    assert_eq!(summary.total_budget, 10000);
    assert_eq!(summary.total_spent, 4500.0);
    assert_eq!(summary.remaining, 5500.0);
    assert_eq!(summary.utilization, 45.0);
}

#[test]
fn summary_with_no_budget_string() {
    let trip = trip_with_budget("");
    let items = vec![item(BudgetCategory::Shopping, 200.0, "2025-06-01")];

    let summary = summarize(&trip, &items);
    assert_eq!(summary.total_budget, 0);
    assert_eq!(summary.total_spent, 200.0);
    assert_eq!(summary.remaining, -200.0);
    assert_eq!(summary.utilization, 0.0);
}

#[test]
fn summary_reports_overspend_unclamped() {
    let trip = trip_with_budget("₪1,000");
    let items = vec![item(BudgetCategory::Activities, 1500.0, "2025-06-05")];

    let summary = summarize(&trip, &items);
    assert!(summary.utilization > 100.0);
    assert_eq!(summary.remaining, -500.0);
}

#[test]
fn budget_category_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&BudgetCategory::Accommodation).unwrap(),
        "\"accommodation\""
    );
    let parsed: BudgetCategory = serde_json::from_str("\"shopping\"").unwrap();
    assert_eq!(parsed, BudgetCategory::Shopping);
}

#[test]
fn budget_item_missing_category_defaults_to_other() {
    let parsed: BudgetItem = serde_json::from_str(
        r#"{"id":"b1","title":"Misc","amount":12.5,"date":"2025-06-01"}"#,
    )
    .unwrap();
    assert_eq!(parsed.category, BudgetCategory::Other);
}
