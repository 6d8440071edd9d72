//! Gate in front of the comment subsystem.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::{CommentBacking, ConfigHandle, Configuration};
use crate::domain::Comment;
use crate::error::{DomainError, FeatureDisabledError};
use crate::ports::CommentStore;

/// Fails unless comments are configured as native.
pub fn ensure_native_comments(config: &Configuration) -> Result<(), FeatureDisabledError> {
    match config.comment_backing {
        CommentBacking::Native => Ok(()),
        mode => Err(FeatureDisabledError { mode }),
    }
}

/// Comment access for posts, checked against the live configuration on every call.
#[derive(Clone)]
pub struct PostComments {
    store: Arc<dyn CommentStore>,
    config: ConfigHandle,
}

impl PostComments {
    pub fn new(store: Arc<dyn CommentStore>, config: ConfigHandle) -> Self {
        Self { store, config }
    }

    fn gate(&self, post_id: Uuid) -> Result<(), FeatureDisabledError> {
        self.config.read(ensure_native_comments).inspect_err(|err| {
            tracing::warn!(%post_id, mode = %err.mode, "Rejected comment access");
        })
    }

    pub async fn list(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        self.gate(post_id)?;
        Ok(self.store.comments_for(post_id).await?)
    }

    pub async fn replace(&self, post_id: Uuid, comments: Vec<Comment>) -> Result<(), DomainError> {
        self.gate(post_id)?;
        Ok(self.store.replace(post_id, comments).await?)
    }

    /// Remove a deleted post's comments. Not gated: nothing is read or written
    /// on behalf of a reader.
    pub async fn clear(&self, post_id: Uuid) -> Result<(), DomainError> {
        Ok(self.store.clear(post_id).await?)
    }
}
