use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blog user - the author of posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub last_modified_date: DateTime<Utc>,
}

impl BlogUser {
    /// Create a new user with a generated ID and the current timestamp.
    pub fn new(name: String, email: String) -> Self {
        Self::with_id(Uuid::new_v4(), name, email)
    }

    /// Build a user under an existing ID, stamped with the current time.
    ///
    /// Used when a user is replaced in place.
    pub fn with_id(id: Uuid, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            last_modified_date: Utc::now(),
        }
    }
}
