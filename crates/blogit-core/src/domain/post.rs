use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuthorRef;
use crate::config::ConfigHandle;
use crate::lifecycle;

/// Post entity - a blog article written by an author.
///
/// `id` and `created_at` stay `None` until the storage collaborator persists
/// the post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<Uuid>,
    pub title: String,
    pub body: String,
    pub state: Option<String>,
    pub author: Option<AuthorRef>,
    /// Project the post was written for. Only the create-time ownership rule reads it.
    pub project_id: Option<Uuid>,
    pub tags: BTreeSet<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a new post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    /// Initial state. Defaults to the first configured hidden state if not specified.
    pub state: Option<String>,
    pub author: Option<AuthorRef>,
    pub project_id: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Input for updating an existing post. All fields are optional for partial updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostChanges {
    pub title: Option<String>,
    pub body: Option<String>,
    pub state: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Post {
    /// Build an unsaved post, filling in the default state when none is given.
    pub fn new(input: NewPost, config: &ConfigHandle) -> Self {
        let state = input
            .state
            .or_else(|| config.read(lifecycle::default_state));

        Self {
            id: None,
            title: input.title,
            body: input.body,
            state,
            author: input.author,
            project_id: input.project_id,
            tags: input.tags.into_iter().collect(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Apply a partial update.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(body) = changes.body {
            self.body = body;
        }
        if let Some(state) = changes.state {
            self.state = Some(state);
        }
        if let Some(tags) = changes.tags {
            self.tags = tags.into_iter().collect();
        }
    }

    /// URL parameter for the post: `"<id>-<title-slug>"`.
    pub fn to_param(&self) -> String {
        let slug = parameterize(&self.title);
        match self.id {
            Some(id) => format!("{id}-{slug}"),
            None => slug,
        }
    }
}

/// Lower-case ASCII words of `text` joined by `-`.
fn parameterize(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
