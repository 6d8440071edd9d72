use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use blogit_core::domain::{Author, AuthorRef, ProjectRef};
use blogit_core::ports::AuthorDirectory;

/// Author type name used for [`Blogger`] references.
pub const BLOGGER_TYPE: &str = "User";

/// A user account that writes posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blogger {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    /// `None` when the user has never been given project ownership.
    #[serde(default)]
    pub owned_projects: Option<Vec<Uuid>>,
}

impl Blogger {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            full_name: None,
            owned_projects: None,
        }
    }

    pub fn owning(mut self, project: Uuid) -> Self {
        self.owned_projects.get_or_insert_with(Vec::new).push(project);
        self
    }
}

impl Author for Blogger {
    fn author_type(&self) -> &str {
        BLOGGER_TYPE
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn display_name(&self, capability: &str) -> Option<String> {
        match capability {
            "username" => Some(self.username.clone()),
            "email" => Some(self.email.clone()),
            "full_name" => Some(self.full_name.clone().unwrap_or_default()),
            _ => None,
        }
    }

    fn owned_projects(&self) -> Option<Vec<ProjectRef>> {
        self.owned_projects
            .as_ref()
            .map(|projects| projects.iter().copied().map(ProjectRef).collect())
    }
}

/// In-memory author lookup keyed by author reference.
pub struct InMemoryAuthorDirectory {
    authors: RwLock<HashMap<AuthorRef, Arc<dyn Author>>>,
}

impl InMemoryAuthorDirectory {
    pub fn new() -> Self {
        Self {
            authors: RwLock::new(HashMap::new()),
        }
    }

    /// Add or replace an author; returns the reference posts should carry.
    pub async fn register(&self, author: Arc<dyn Author>) -> AuthorRef {
        let author_ref = author.to_ref();
        self.authors.write().await.insert(author_ref.clone(), author);
        author_ref
    }

    pub async fn remove(&self, author: &AuthorRef) {
        self.authors.write().await.remove(author);
    }
}

impl Default for InMemoryAuthorDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorDirectory for InMemoryAuthorDirectory {
    async fn find(&self, author: &AuthorRef) -> Option<Arc<dyn Author>> {
        self.authors.read().await.get(author).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_and_find() {
        let directory = InMemoryAuthorDirectory::new();
        let blogger = Blogger::new("Jeronimo", "jeronimo@example.com");

        let author_ref = directory.register(Arc::new(blogger)).await;
        let found = directory.find(&author_ref).await.unwrap();

        assert_eq!(found.display_name("username").as_deref(), Some("Jeronimo"));
        assert_eq!(found.display_name("display_name"), None);
    }

    #[tokio::test]
    async fn test_type_is_part_of_the_reference() {
        let directory = InMemoryAuthorDirectory::new();
        let blogger = Blogger::new("Jeronimo", "jeronimo@example.com");
        let id = blogger.id;
        directory.register(Arc::new(blogger)).await;

        assert!(directory.find(&AuthorRef::new("Admin", id)).await.is_none());
    }

    #[test]
    fn test_owned_projects() {
        let blogger = Blogger::new("Jeronimo", "jeronimo@example.com");
        assert_eq!(blogger.owned_projects(), None);

        let project = Uuid::new_v4();
        let owner = blogger.owning(project);
        assert_eq!(owner.owned_projects(), Some(vec![ProjectRef(project)]));
    }
}
