use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blog post - written by a [`BlogUser`](super::BlogUser).
///
/// `user_id` is only checked against existing users when the post is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub user_id: Uuid,
    pub topic: String,
    pub content: String,
    pub last_modified_date: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post.
    pub fn new(user_id: Uuid, topic: String, content: String) -> Self {
        Self::with_id(Uuid::new_v4(), user_id, topic, content)
    }

    pub fn with_id(id: Uuid, user_id: Uuid, topic: String, content: String) -> Self {
        Self {
            id,
            user_id,
            topic,
            content,
            last_modified_date: Utc::now(),
        }
    }
}
