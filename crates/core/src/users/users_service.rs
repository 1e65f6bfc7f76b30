use std::sync::Arc;

use log::error;

use crate::errors::Result;
use crate::stats::user_stats_diff;
use crate::subscription::{Subscription, TaskGuard};
use crate::trips::Trip;

use super::users_model::{ProfileUpdate, UserProfile};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};

/// Service for the singleton user profile.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    fn subscribe_profile(&self) -> Subscription<UserProfile> {
        self.repository.watch_profile()
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<()> {
        if update.is_empty() {
            return Ok(());
        }
        self.repository.update_profile(update).await
    }
}

/// Keep the derived profile counters in sync with the trip list.
///
/// Reacts to every trips snapshot: computes the diff against the latest
/// observed profile and writes it back only when something changed, so an
/// unchanged trip list causes no redundant store writes.
///
/// This reaction is uncoordinated with manual profile edits; the two can
/// interleave and the last write observed by the store wins. A stats
/// write failure is logged and dropped, the next snapshot will retrigger
/// the computation anyway.
///
/// Dropping the returned guard stops the sync.
pub fn spawn_stats_sync(
    repository: Arc<dyn UserRepositoryTrait>,
    mut trips: Subscription<Vec<Trip>>,
    profile: Subscription<UserProfile>,
) -> TaskGuard {
    let handle = tokio::spawn(async move {
        loop {
            if let Some(update) = user_stats_diff(&trips.current(), &profile.current()) {
                if let Err(e) = repository.apply_stats(update).await {
                    error!("Error updating user stats: {}", e);
                }
            }
            if !trips.changed().await {
                break;
            }
        }
    });
    TaskGuard::new(handle)
}
