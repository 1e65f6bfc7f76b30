//! Tripdeck Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Tripdeck: trips with
//! embedded destinations, per-trip checklists and budgets, the singleton
//! user profile, and the pure derived-stats calculator. It is
//! store-agnostic and defines repository traits that are implemented by
//! the `storage-firestore` crate.

pub mod budget;
pub mod checklist;
pub mod constants;
pub mod errors;
pub mod stats;
pub mod subscription;
pub mod trips;
pub mod users;

// Re-export common types from the trips module
pub use trips::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

// Re-export subscription primitives
pub use subscription::{Subscription, SubscriptionStream, TaskGuard};
