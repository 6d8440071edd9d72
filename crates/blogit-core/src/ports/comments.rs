use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Comment;
use crate::error::RepoError;

/// Comment subsystem collaborator.
///
/// Callers go through the comment gate first; the store itself doesn't look at
/// the blog configuration.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Comments on a post, oldest first.
    async fn comments_for(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;

    /// Replace all comments on a post.
    async fn replace(&self, post_id: Uuid, comments: Vec<Comment>) -> Result<(), RepoError>;

    /// Drop every comment on a post.
    async fn clear(&self, post_id: Uuid) -> Result<(), RepoError>;
}
