use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use blogit_core::domain::Post;
use blogit_core::error::RepoError;
use blogit_core::ports::{BaseRepository, PostOrder, PostQuery, PostRepository};

/// In-memory post storage using a HashMap with async RwLock.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    fn compare(order: PostOrder, a: &Post, b: &Post) -> Ordering {
        let by_time = match order {
            PostOrder::CreatedAtDesc => b.created_at.cmp(&a.created_at),
            PostOrder::CreatedAtAsc => a.created_at.cmp(&b.created_at),
        };
        by_time.then_with(|| a.id.cmp(&b.id))
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn insert(&self, mut post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let id = *post.id.get_or_insert_with(Uuid::new_v4);
        if store.contains_key(&id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        let now = Utc::now();
        post.created_at.get_or_insert(now);
        post.updated_at = Some(now);

        store.insert(id, post.clone());
        Ok(post)
    }

    async fn update(&self, mut post: Post) -> Result<Post, RepoError> {
        let id = post.id.ok_or(RepoError::NotFound)?;
        let mut store = self.store.write().await;
        let existing = store.get_mut(&id).ok_or(RepoError::NotFound)?;

        if post.created_at.is_none() {
            post.created_at = existing.created_at;
        }
        post.updated_at = Some(Utc::now());

        *existing = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn query(&self, query: PostQuery) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;

        let mut posts: Vec<&Post> = store
            .values()
            .filter(|post| match &query.state {
                Some(state) => post.state.as_ref() == Some(state),
                None => true,
            })
            .collect();
        posts.sort_by(|a, b| Self::compare(query.order, a, b));

        Ok(posts
            .into_iter()
            .skip(query.offset)
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn post(state: &str, days_ago: i64) -> Post {
        Post {
            id: None,
            title: format!("Post from {days_ago} days ago"),
            body: "Body long enough to be valid".to_string(),
            state: Some(state.to_string()),
            author: None,
            project_id: None,
            tags: Default::default(),
            created_at: Some(Utc::now() - Duration::days(days_ago)),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamps() {
        let repo = InMemoryPostRepository::new();
        let mut unsaved = post("draft", 0);
        unsaved.created_at = None;

        let saved = repo.insert(unsaved).await.unwrap();

        assert!(saved.id.is_some());
        assert!(saved.created_at.is_some());
        assert_eq!(repo.find_by_id(saved.id.unwrap()).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_update_missing_post_fails() {
        let repo = InMemoryPostRepository::new();
        let mut ghost = post("draft", 0);
        ghost.id = Some(Uuid::new_v4());

        assert!(matches!(repo.update(ghost).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.insert(post("draft", 0)).await.unwrap();
        let id = saved.id.unwrap();

        repo.delete(id).await.unwrap();

        assert!(repo.is_empty().await);
        assert!(matches!(repo.delete(id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_query_orders_filters_and_pages() {
        let repo = InMemoryPostRepository::new();
        for days in 0..6 {
            let state = if days % 2 == 0 { "published" } else { "draft" };
            repo.insert(post(state, days)).await.unwrap();
        }

        let newest = repo
            .query(PostQuery::order_by(PostOrder::CreatedAtDesc).limit(2))
            .await
            .unwrap();
        assert_eq!(newest[0].title, "Post from 0 days ago");
        assert_eq!(newest[1].title, "Post from 1 days ago");

        let second_page = repo
            .query(PostQuery::default().offset(2).limit(2))
            .await
            .unwrap();
        assert_eq!(second_page[0].title, "Post from 2 days ago");

        let published = repo
            .query(PostQuery::default().with_state("published"))
            .await
            .unwrap();
        assert_eq!(published.len(), 3);
        assert!(published.iter().all(|p| p.state.as_deref() == Some("published")));
    }
}
