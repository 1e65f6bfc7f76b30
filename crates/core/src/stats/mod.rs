//! Derived statistics - pure, synchronous, side-effect-free folds over
//! trip and budget lists.


use crate::budget::{BudgetCategory, BudgetItem};
use crate::trips::Trip;
use crate::users::{UserProfile, UserStatsUpdate};

/// Total number of destinations across all trips. A trip whose
/// destination list is absent in the stored document deserializes to an
/// empty list and counts as zero.
pub fn total_destinations(trips: &[Trip]) -> i64 {
    trips.iter().map(|trip| trip.destinations.len() as i64).sum()
}

/// Number of trips with status `confirmed`. Planning/active/completed
/// trips are never counted.
pub fn completed_trip_count(trips: &[Trip]) -> i64 {
    trips.iter().filter(|trip| trip.status.is_confirmed()).count() as i64
}

/// Sum of amounts recorded under one category. Additive and
/// order-independent.
pub fn category_spend(items: &[BudgetItem], category: BudgetCategory) -> f64 {
    items
        .iter()
        .filter(|item| item.category == category)
        .map(|item| item.amount)
        .sum()
}

/// Sum of all recorded amounts.
pub fn total_spent(items: &[BudgetItem]) -> f64 {
    items.iter().map(|item| item.amount).sum()
}

/// Percentage of the budget spent. Zero when there is no budget.
///
/// The value is deliberately unclamped: callers clamp to [0, 100] for
/// progress-bar display but use the raw value to detect overspend
/// (> 100).
pub fn budget_utilization(spent: f64, total_budget: i64) -> f64 {
    if total_budget > 0 {
        spent / total_budget as f64 * 100.0
    } else {
        0.0
    }
}

/// Parse a display-formatted budget string to a whole number.
///
/// The rule is exactly: strip every non-digit character, parse the
/// remainder as an integer, default 0. This is lossy by construction -
/// currency symbols, thousand separators and decimal points all vanish,
/// so "₪1,234.56" parses to 123456. Stored documents depend on this
/// behavior; do not make it smarter.
pub fn parse_budget(budget: &str) -> i64 {
    let digits: String = budget.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().unwrap_or(0)
}

/// Recompute the derived profile counters from the trip list.
///
/// Returns a diff carrying only the changed counters, or `None` when
/// both already match the profile - callers skip the store write in that
/// case, so recomputing twice over an unchanged list writes nothing the
/// second time.
pub fn user_stats_diff(trips: &[Trip], profile: &UserProfile) -> Option<UserStatsUpdate> {
    let destinations = total_destinations(trips);
    let completed = completed_trip_count(trips);

    let mut update = UserStatsUpdate::default();
    if profile.saved_places != destinations {
        update.saved_places = Some(destinations);
    }
    if profile.trips != completed {
        update.trips = Some(completed);
    }

    if update.is_empty() {
        None
    } else {
        Some(update)
    }
}
