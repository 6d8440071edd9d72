use std::collections::BTreeSet;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::RepoError;

/// Tagging collaborator.
#[async_trait]
pub trait TagStore: Send + Sync {
    /// Make `tags` the exact tag set of the post.
    async fn set_tags(&self, post_id: Uuid, tags: &BTreeSet<String>) -> Result<(), RepoError>;

    async fn tags_for(&self, post_id: Uuid) -> Result<BTreeSet<String>, RepoError>;

    /// Forget every tag of a deleted post.
    async fn clear(&self, post_id: Uuid) -> Result<(), RepoError>;
}
