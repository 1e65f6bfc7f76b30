//! Firestore-backed user profile repository.
//!
//! The profile is the singleton `users/mainUser` document. A missing
//! document is not an error anywhere in this module: reads and watches
//! fall back to the guest placeholder, and merge writes create the
//! document on first use.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use tripdeck_core::constants::{MAIN_USER_DOC_ID, USERS_COLLECTION};
use tripdeck_core::errors::Result;
use tripdeck_core::subscription::Subscription;
use tripdeck_core::users::{ProfileUpdate, UserProfile, UserRepositoryTrait, UserStatsUpdate};

use crate::client::FirestoreClient;
use crate::errors::StorageError;
use crate::value::{decode_document, encode_fields};
use crate::watch::{spawn_poll_watch, DEFAULT_POLL_INTERVAL};

pub struct UserRepository {
    client: Arc<FirestoreClient>,
    poll_interval: Duration,
}

impl UserRepository {
    pub fn new(client: Arc<FirestoreClient>) -> Self {
        Self::with_poll_interval(client, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_poll_interval(client: Arc<FirestoreClient>, poll_interval: Duration) -> Self {
        UserRepository {
            client,
            poll_interval,
        }
    }

    fn doc_path() -> String {
        format!("{USERS_COLLECTION}/{MAIN_USER_DOC_ID}")
    }

    async fn fetch_profile(
        client: &FirestoreClient,
    ) -> std::result::Result<UserProfile, StorageError> {
        match client.get_document(&Self::doc_path()).await? {
            Some(document) => decode_document(&document),
            None => Ok(UserProfile::guest()),
        }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn watch_profile(&self) -> Subscription<UserProfile> {
        let client = self.client.clone();
        spawn_poll_watch(
            UserProfile::guest(),
            UserProfile::guest(),
            self.poll_interval,
            move || {
                let client = client.clone();
                async move { Self::fetch_profile(&client).await }
            },
        )
    }

    async fn get_profile(&self) -> Result<UserProfile> {
        Ok(Self::fetch_profile(&self.client).await?)
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<()> {
        if update.is_empty() {
            return Ok(());
        }
        let mut mask = Vec::new();
        if update.name.is_some() {
            mask.push("name");
        }
        if update.avatar.is_some() {
            mask.push("avatar");
        }
        let fields = encode_fields(&update)?;
        self.client
            .patch_document(&Self::doc_path(), fields, &mask)
            .await?;
        Ok(())
    }

    async fn apply_stats(&self, update: UserStatsUpdate) -> Result<()> {
        if update.is_empty() {
            return Ok(());
        }
        let mut mask = Vec::new();
        if update.saved_places.is_some() {
            mask.push("savedPlaces");
        }
        if update.trips.is_some() {
            mask.push("trips");
        }
        let fields = encode_fields(&update)?;
        self.client
            .patch_document(&Self::doc_path(), fields, &mask)
            .await?;
        Ok(())
    }
}
