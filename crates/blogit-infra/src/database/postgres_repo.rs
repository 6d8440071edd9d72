//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use blogit_core::domain::Post;
use blogit_core::error::RepoError;
use blogit_core::ports::{PostOrder, PostQuery, PostRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn query(&self, query: PostQuery) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(?query, "Querying posts");

        let mut select = PostEntity::find();
        if let Some(state) = query.state {
            select = select.filter(post::Column::State.eq(state));
        }
        let select = match query.order {
            PostOrder::CreatedAtDesc => select.order_by_desc(post::Column::CreatedAt),
            PostOrder::CreatedAtAsc => select.order_by_asc(post::Column::CreatedAt),
        }
        .order_by_asc(post::Column::Id)
        // Postgres OFFSET is a signed bigint.
        .offset(query.offset.min(i64::MAX as usize) as u64)
        .limit(query.limit.map(|limit| limit as u64));

        let result = select
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
