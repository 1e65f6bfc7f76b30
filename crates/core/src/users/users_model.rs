//! User profile domain models.

use serde::{Deserialize, Serialize};

use crate::constants::GUEST_USER_NAME;

/// The singleton user profile (`users/mainUser`).
///
/// `trips`, `total_spent` and `saved_places` are derived counters,
/// recomputed from the trip list and written back as a side effect; they
/// are not edited directly by the user. `name` and `avatar` are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Completed-trip counter.
    #[serde(default)]
    pub trips: i64,
    #[serde(default)]
    pub total_spent: f64,
    /// Destination counter across all trips.
    #[serde(default)]
    pub saved_places: i64,
}

impl UserProfile {
    /// Placeholder emitted when the profile document does not exist.
    pub fn guest() -> Self {
        UserProfile {
            name: GUEST_USER_NAME.to_string(),
            avatar: None,
            trips: 0,
            total_spent: 0.0,
            saved_places: 0,
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile::guest()
    }
}

/// Manual edit of the user-editable profile fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.avatar.is_none()
    }
}

/// Diff-only update of the derived stat counters. Fields left `None`
/// are unchanged and not written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_places: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trips: Option<i64>,
}

impl UserStatsUpdate {
    pub fn is_empty(&self) -> bool {
        self.saved_places.is_none() && self.trips.is_none()
    }
}
