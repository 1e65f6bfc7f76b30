//! Budget module - domain models, services, and traits.

mod budget_model;
mod budget_service;
mod budget_traits;

#[cfg(test)]
mod budget_tests;

pub use budget_model::{BudgetCategory, BudgetItem, BudgetSummary, NewBudgetItem};
pub use budget_service::{summarize, BudgetService};
pub use budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
