use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment left by a reader on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub name: String,
    pub email: String,
    pub website: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment on `post_id`.
    pub fn new(post_id: Uuid, name: String, email: String, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            name,
            email,
            website: None,
            body,
            created_at: Utc::now(),
        }
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }
}
