/// Trips collection name in the remote store.
pub const TRIPS_COLLECTION: &str = "trips";

/// Per-trip checklist sub-collection name.
pub const CHECKLIST_COLLECTION: &str = "checklist";

/// Per-trip budget items sub-collection name.
pub const BUDGET_ITEMS_COLLECTION: &str = "budgetItems";

/// Users collection name in the remote store.
pub const USERS_COLLECTION: &str = "users";

/// Document id of the singleton user profile.
pub const MAIN_USER_DOC_ID: &str = "mainUser";

/// Display name used when the profile document does not exist yet.
pub const GUEST_USER_NAME: &str = "Guest";

/// Fallback cover images assigned to trips created without one.
pub const DEFAULT_COVER_IMAGES: [&str; 4] = [
    "https://images.pexels.com/photos/290386/pexels-photo-290386.jpeg",
    "https://images.pexels.com/photos/161901/san-francisco-golden-gate-bridge-sunrise-california-161901.jpeg",
    "https://images.pexels.com/photos/373924/pexels-photo-373924.jpeg",
    "https://images.pexels.com/photos/417074/pexels-photo-417074.jpeg",
];
