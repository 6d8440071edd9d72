use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Author, AuthorRef};

/// Resolves author references to the host application's author objects.
#[async_trait]
pub trait AuthorDirectory: Send + Sync {
    /// `None` when nothing exists behind the reference.
    async fn find(&self, author: &AuthorRef) -> Option<Arc<dyn Author>>;
}
