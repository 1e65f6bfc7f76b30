//! Checklist module - domain models, services, traits, and the default
//! packing template.

mod checklist_model;
mod checklist_service;
mod checklist_template;
mod checklist_traits;

#[cfg(test)]
mod checklist_tests;

pub use checklist_model::{ChecklistItem, NewChecklistItem};
pub use checklist_service::{completion_ratio, ChecklistService};
pub use checklist_template::{
    default_checklist_items, CATEGORY_CLOTHING, CATEGORY_DOCUMENTS, CATEGORY_ELECTRONICS,
    CATEGORY_ESSENTIALS, CATEGORY_TOILETRIES,
};
pub use checklist_traits::{ChecklistRepositoryTrait, ChecklistServiceTrait};
