use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blogit_core::error::RepoError;
use blogit_core::ports::TagStore;

/// In-memory tag sets per post.
pub struct InMemoryTagStore {
    tags: RwLock<HashMap<Uuid, BTreeSet<String>>>,
}

impl InMemoryTagStore {
    pub fn new() -> Self {
        Self {
            tags: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryTagStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagStore for InMemoryTagStore {
    async fn set_tags(&self, post_id: Uuid, tags: &BTreeSet<String>) -> Result<(), RepoError> {
        let mut store = self.tags.write().await;
        if tags.is_empty() {
            store.remove(&post_id);
        } else {
            store.insert(post_id, tags.clone());
        }
        Ok(())
    }

    async fn tags_for(&self, post_id: Uuid) -> Result<BTreeSet<String>, RepoError> {
        Ok(self
            .tags
            .read()
            .await
            .get(&post_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn clear(&self, post_id: Uuid) -> Result<(), RepoError> {
        self.tags.write().await.remove(&post_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_replaces_previous_tags() {
        let store = InMemoryTagStore::new();
        let post_id = Uuid::new_v4();

        let first: BTreeSet<String> = ["rust", "blog"].map(String::from).into();
        store.set_tags(post_id, &first).await.unwrap();
        let second: BTreeSet<String> = ["rust"].map(String::from).into();
        store.set_tags(post_id, &second).await.unwrap();

        assert_eq!(store.tags_for(post_id).await.unwrap(), second);

        store.clear(post_id).await.unwrap();
        assert!(store.tags_for(post_id).await.unwrap().is_empty());
    }
}
