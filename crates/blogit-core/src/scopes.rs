//! Read-only listings over the post collection.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::ConfigHandle;
use crate::domain::Post;
use crate::error::RepoError;
use crate::ports::{PostOrder, PostQuery, PostRepository};

/// Index and active listings.
///
/// Page size comes from the configuration unless the collection overrides it
/// with [`QueryScopes::paginates_per`].
#[derive(Clone)]
pub struct QueryScopes {
    repo: Arc<dyn PostRepository>,
    config: ConfigHandle,
    // 0 = no override
    per_page_override: Arc<AtomicUsize>,
}

impl QueryScopes {
    pub fn new(repo: Arc<dyn PostRepository>, config: ConfigHandle) -> Self {
        Self {
            repo,
            config,
            per_page_override: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Override the page size for this collection; `None` restores the configured one.
    pub fn paginates_per(&self, per_page: Option<usize>) {
        self.per_page_override
            .store(per_page.unwrap_or(0), Ordering::Relaxed);
    }

    pub fn per_page(&self) -> usize {
        match self.per_page_override.load(Ordering::Relaxed) {
            0 => self.config.read(|c| c.posts_per_page).max(1),
            n => n,
        }
    }

    /// Query for 1-indexed `page` of the index, newest first. Page 0 is read as page 1.
    pub fn index_query(&self, page: usize) -> PostQuery {
        let per_page = self.per_page();
        PostQuery::order_by(PostOrder::CreatedAtDesc)
            .offset(page.saturating_sub(1).saturating_mul(per_page))
            .limit(per_page)
    }

    /// Query for posts in the published-marker state.
    pub fn active_query(&self) -> PostQuery {
        let marker = self.config.read(|c| c.published_marker.clone());
        PostQuery::order_by(PostOrder::CreatedAtDesc).with_state(marker)
    }

    pub async fn for_index(&self, page: usize) -> Result<Vec<Post>, RepoError> {
        let query = self.index_query(page);
        tracing::debug!(page, offset = query.offset, limit = ?query.limit, "Loading index page");
        self.repo.query(query).await
    }

    pub async fn active(&self) -> Result<Vec<Post>, RepoError> {
        let query = self.active_query();
        tracing::debug!(state = ?query.state, "Loading active posts");
        self.repo.query(query).await
    }
}
