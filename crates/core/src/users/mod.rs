//! Users module - the singleton profile, services, and traits.

mod users_model;
mod users_service;
mod users_traits;


pub use users_model::{ProfileUpdate, UserProfile, UserStatsUpdate};
pub use users_service::{spawn_stats_sync, UserService};
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
