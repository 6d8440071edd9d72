use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blogit_core::domain::Comment;
use blogit_core::error::RepoError;
use blogit_core::ports::CommentStore;

/// In-memory comments per post.
pub struct InMemoryCommentStore {
    comments: RwLock<HashMap<Uuid, Vec<Comment>>>,
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self {
            comments: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCommentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn comments_for(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let store = self.comments.read().await;
        let mut comments = store.get(&post_id).cloned().unwrap_or_default();
        comments.sort_by_key(|c| c.created_at);
        Ok(comments)
    }

    async fn replace(&self, post_id: Uuid, comments: Vec<Comment>) -> Result<(), RepoError> {
        if let Some(stray) = comments.iter().find(|c| c.post_id != post_id) {
            return Err(RepoError::Constraint(format!(
                "comment {} belongs to post {}",
                stray.id, stray.post_id
            )));
        }
        self.comments.write().await.insert(post_id, comments);
        Ok(())
    }

    async fn clear(&self, post_id: Uuid) -> Result<(), RepoError> {
        self.comments.write().await.remove(&post_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replace_and_list() {
        let store = InMemoryCommentStore::new();
        let post_id = Uuid::new_v4();
        let comment = Comment::new(
            post_id,
            "Reader".into(),
            "reader@example.com".into(),
            "Nice post".into(),
        );

        store.replace(post_id, vec![comment.clone()]).await.unwrap();

        assert_eq!(store.comments_for(post_id).await.unwrap(), vec![comment]);
        assert!(store.comments_for(Uuid::new_v4()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_comment_of_other_post() {
        let store = InMemoryCommentStore::new();
        let comment = Comment::new(
            Uuid::new_v4(),
            "Reader".into(),
            "reader@example.com".into(),
            "Wrong post".into(),
        );

        let result = store.replace(Uuid::new_v4(), vec![comment]).await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }
}
