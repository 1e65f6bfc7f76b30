use crate::errors::Result;
use crate::subscription::Subscription;
use crate::users::users_model::{ProfileUpdate, UserProfile, UserStatsUpdate};
use async_trait::async_trait;

/// Trait for user profile store operations on the singleton
/// `users/mainUser` document.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Live snapshot subscription on the profile document. A missing
    /// document emits the guest placeholder rather than failing; so does
    /// a subscription error (logged, no retry).
    fn watch_profile(&self) -> Subscription<UserProfile>;

    /// Read the profile, falling back to the guest placeholder when the
    /// document does not exist.
    async fn get_profile(&self) -> Result<UserProfile>;

    /// Field-mask merge of the user-editable fields.
    async fn update_profile(&self, update: ProfileUpdate) -> Result<()>;

    /// Write back recomputed derived counters; only set fields are
    /// written.
    async fn apply_stats(&self, update: UserStatsUpdate) -> Result<()>;
}

/// Trait for user profile service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn subscribe_profile(&self) -> Subscription<UserProfile>;
    async fn update_profile(&self, update: ProfileUpdate) -> Result<()>;
}
