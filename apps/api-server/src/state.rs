//! Application state - shared across all handlers.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use blogit_core::ports::PostRepository;
use blogit_core::{Collaborators, ConfigHandle, PostService};
use blogit_infra::{
    Blogger, InMemoryAuthorDirectory, InMemoryCommentStore, InMemoryPostRepository,
    InMemoryTagStore,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub config: ConfigHandle,
    pub authors: Arc<InMemoryAuthorDirectory>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(app_config: &AppConfig) -> anyhow::Result<Self> {
        let config = ConfigHandle::new(app_config.blog.clone());

        let authors = Arc::new(InMemoryAuthorDirectory::new());
        if let Some(path) = &app_config.authors_file {
            let count = load_authors(&authors, path).await?;
            tracing::info!(count, path = %path.display(), "Loaded bloggers");
        }

        let repo = post_repository(app_config).await;
        let state = Self::with_repository(config, repo, authors);

        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// State over the given post storage, with in-memory tags and comments.
    pub fn with_repository(
        config: ConfigHandle,
        repo: Arc<dyn PostRepository>,
        authors: Arc<InMemoryAuthorDirectory>,
    ) -> Self {
        let posts = PostService::new(
            config.clone(),
            Collaborators {
                posts: repo,
                authors: authors.clone(),
                tags: Arc::new(InMemoryTagStore::new()),
                comments: Arc::new(InMemoryCommentStore::new()),
            },
        );

        Self {
            posts,
            config,
            authors,
        }
    }
}

#[cfg(feature = "postgres")]
async fn post_repository(app_config: &AppConfig) -> Arc<dyn PostRepository> {
    use blogit_infra::PostgresPostRepository;

    let Some(db_config) = &app_config.database else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return Arc::new(InMemoryPostRepository::new());
    };

    match blogit_infra::database::connect(db_config).await {
        Ok(conn) => Arc::new(PostgresPostRepository::new(conn)),
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            Arc::new(InMemoryPostRepository::new())
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn post_repository(_app_config: &AppConfig) -> Arc<dyn PostRepository> {
    tracing::info!("Running without postgres feature - using in-memory repository");
    Arc::new(InMemoryPostRepository::new())
}

/// Register every blogger listed in the JSON file at `path`.
async fn load_authors(directory: &InMemoryAuthorDirectory, path: &Path) -> anyhow::Result<usize> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading authors file {}", path.display()))?;
    let bloggers: Vec<Blogger> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing authors file {}", path.display()))?;

    let count = bloggers.len();
    for blogger in bloggers {
        directory.register(Arc::new(blogger)).await;
    }
    Ok(count)
}
