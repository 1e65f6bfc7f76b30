//! Firestore storage implementation for Tripdeck.
//!
//! This crate is the Remote Store Gateway: it implements the repository
//! traits defined in `tripdeck-core` against the Firestore REST API and
//! contains:
//! - The typed-value document codec (domain structs ⇄ Firestore values)
//! - Field-mask partial updates and atomic multi-write commits
//! - `arrayUnion`/`arrayRemove` field transforms for embedded destinations
//! - Polling-based snapshot watches feeding core subscriptions
//!
//! # Architecture
//!
//! This crate is the only place in the application where HTTP and the
//! Firestore wire format exist. Everything else works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-firestore (this crate)
//!              │
//!              ▼
//!      Firestore REST API
//! ```
//!
//! # Document layout
//!
//! - `trips/{tripId}` with the `destinations` array embedded inline
//! - `trips/{tripId}/checklist/{itemId}`
//! - `trips/{tripId}/budgetItems/{itemId}`
//! - `users/mainUser` (singleton profile)

pub mod client;
pub mod errors;
pub mod value;
pub mod watch;

// Repository implementations
pub mod budget;
pub mod checklist;
pub mod trips;
pub mod users;

pub use client::{FirestoreClient, FirestoreConfig};
pub use errors::StorageError;

pub use budget::BudgetRepository;
pub use checklist::ChecklistRepository;
pub use trips::TripRepository;
pub use users::UserRepository;

// Re-export from tripdeck-core for convenience
pub use tripdeck_core::errors::{Error, Result, StoreError};
