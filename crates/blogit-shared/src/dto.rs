//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    /// Defaults to the first hidden state.
    #[serde(default)]
    pub state: Option<String>,
    pub author_type: String,
    pub author_id: Uuid,
    #[serde(default)]
    pub project_id: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update of a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub state: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Query string of the index listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexQuery {
    pub page: Option<usize>,
}

/// A post as shown on list pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: Option<Uuid>,
    pub param: String,
    pub title: String,
    pub short_body: String,
    pub author_name: String,
    pub state: Option<String>,
    pub active: bool,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A full post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Option<Uuid>,
    pub param: String,
    pub title: String,
    pub body: String,
    pub state: Option<String>,
    pub author_type: Option<String>,
    pub author_id: Option<Uuid>,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A comment submitted by a reader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    pub body: String,
}

/// A reader comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub name: String,
    pub website: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
