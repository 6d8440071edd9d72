use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity, assigning its ID and timestamps.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Sort order for post queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostOrder {
    /// Newest first; posts created at the same instant are ordered by ascending id.
    #[default]
    CreatedAtDesc,
    CreatedAtAsc,
}

/// Read query over the post collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub order: PostOrder,
    pub offset: usize,
    /// `None` returns every remaining post.
    pub limit: Option<usize>,
    /// Keep only posts whose state equals this value.
    pub state: Option<String>,
}

impl PostQuery {
    pub fn order_by(order: PostOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

/// Post storage collaborator.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Run a read query.
    async fn query(&self, query: PostQuery) -> Result<Vec<Post>, RepoError>;
}
