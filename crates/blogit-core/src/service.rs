//! Post service - ties validation, state rules and rendering to the collaborators.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::author_name::AuthorNameResolver;
use crate::comments::PostComments;
use crate::config::ConfigHandle;
use crate::domain::{Author, Comment, NewPost, Post, PostChanges};
use crate::error::{ConfigurationError, DomainError, RepoError};
use crate::lifecycle::StateLifecycle;
use crate::ports::{AuthorDirectory, CommentStore, PostRepository, TagStore};
use crate::preview;
use crate::scopes::QueryScopes;
use crate::validation::{Phase, ValidationEngine, ValidationErrors};

/// A post prepared for a list page.
#[derive(Debug, Clone, Serialize)]
pub struct PostPreview {
    pub post: Post,
    pub param: String,
    pub short_body: String,
    pub author_name: String,
    pub active: bool,
}

/// Collaborators the service delegates to.
#[derive(Clone)]
pub struct Collaborators {
    pub posts: Arc<dyn PostRepository>,
    pub authors: Arc<dyn AuthorDirectory>,
    pub tags: Arc<dyn TagStore>,
    pub comments: Arc<dyn CommentStore>,
}

/// Entry point for the host application.
#[derive(Clone)]
pub struct PostService {
    config: ConfigHandle,
    posts: Arc<dyn PostRepository>,
    authors: Arc<dyn AuthorDirectory>,
    tags: Arc<dyn TagStore>,
    validation: ValidationEngine,
    lifecycle: StateLifecycle,
    names: AuthorNameResolver,
    scopes: QueryScopes,
    comments: PostComments,
}

impl PostService {
    pub fn new(config: ConfigHandle, collaborators: Collaborators) -> Self {
        let Collaborators {
            posts,
            authors,
            tags,
            comments,
        } = collaborators;

        Self {
            validation: ValidationEngine::new(config.clone()),
            lifecycle: StateLifecycle::new(config.clone()),
            names: AuthorNameResolver::new(config.clone()),
            scopes: QueryScopes::new(posts.clone(), config.clone()),
            comments: PostComments::new(comments, config.clone()),
            config,
            posts,
            authors,
            tags,
        }
    }

    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    pub fn lifecycle(&self) -> &StateLifecycle {
        &self.lifecycle
    }

    pub fn scopes(&self) -> &QueryScopes {
        &self.scopes
    }

    /// Unsaved post with the default state filled in.
    pub fn build(&self, input: NewPost) -> Post {
        Post::new(input, &self.config)
    }

    async fn author_of(&self, post: &Post) -> Option<Arc<dyn Author>> {
        let author_ref = post.author.as_ref()?;
        let author = self.authors.find(author_ref).await;
        if author.is_none() {
            tracing::debug!(author = %author_ref, "Author reference did not resolve");
        }
        author
    }

    /// Validation result for `post` in `phase`, without saving anything.
    pub async fn validate(&self, post: &Post, phase: Phase) -> ValidationErrors {
        let author = self.author_of(post).await;
        self.validation.validate(post, author.as_deref(), phase)
    }

    /// Validate and persist a new post.
    pub async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        let post = self.build(input);
        self.validate(&post, Phase::Create).await.into_result()?;

        let tags = post.tags.clone();
        let mut saved = self.posts.insert(post).await?;
        if let Some(id) = saved.id {
            self.tags.set_tags(id, &tags).await?;
            tracing::info!(post_id = %id, state = ?saved.state, "Post created");
        }
        saved.tags = tags;
        Ok(saved)
    }

    /// Apply `changes` to a stored post, validate and save it.
    pub async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, DomainError> {
        let mut post = self.find(id).await?;
        post.apply(changes);
        self.save(post).await
    }

    /// Validate and save an already persisted post.
    pub async fn save(&self, post: Post) -> Result<Post, DomainError> {
        let Some(id) = post.id else {
            return Err(DomainError::Repository(RepoError::NotFound));
        };
        self.validate(&post, Phase::Update).await.into_result()?;

        let tags = post.tags.clone();
        let mut saved = self.posts.update(post).await?;
        self.tags.set_tags(id, &tags).await?;
        saved.tags = tags;
        tracing::info!(post_id = %id, state = ?saved.state, "Post updated");
        Ok(saved)
    }

    pub async fn find(&self, id: Uuid) -> Result<Post, DomainError> {
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })?;
        post.tags = self.tags.tags_for(id).await?;
        Ok(post)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.posts.delete(id).await?;
        self.tags.clear(id).await?;
        self.comments.clear(id).await?;
        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }

    async fn with_tags(&self, posts: Vec<Post>) -> Result<Vec<Post>, DomainError> {
        let mut tagged = Vec::with_capacity(posts.len());
        for mut post in posts {
            if let Some(id) = post.id {
                post.tags = self.tags.tags_for(id).await?;
            }
            tagged.push(post);
        }
        Ok(tagged)
    }

    /// Page `page` (1-indexed) of the index, newest first.
    pub async fn for_index(&self, page: usize) -> Result<Vec<Post>, DomainError> {
        let posts = self.scopes.for_index(page).await?;
        self.with_tags(posts).await
    }

    /// Posts in the published-marker state.
    pub async fn active(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.scopes.active().await?;
        self.with_tags(posts).await
    }

    /// Display name of the post's author; empty when the post has no resolvable author.
    pub async fn author_name(&self, post: &Post) -> Result<String, ConfigurationError> {
        let author = self.author_of(post).await;
        self.names.resolve(author.as_deref())
    }

    /// Render a post for a list page.
    pub async fn preview(&self, post: Post) -> Result<PostPreview, DomainError> {
        let author_name = self.author_name(&post).await?;
        Ok(PostPreview {
            param: post.to_param(),
            short_body: preview::short_body(&post.body),
            active: self.lifecycle.is_active(&post),
            author_name,
            post,
        })
    }

    /// Rendered index page.
    pub async fn index_page(&self, page: usize) -> Result<Vec<PostPreview>, DomainError> {
        let mut previews = Vec::new();
        for post in self.for_index(page).await? {
            previews.push(self.preview(post).await?);
        }
        Ok(previews)
    }

    /// Comments on a stored post. Fails unless comments are native.
    pub async fn comments(&self, id: Uuid) -> Result<Vec<Comment>, DomainError> {
        self.comments.list(id).await
    }

    /// Replace the comments on a stored post. Fails unless comments are native.
    pub async fn replace_comments(
        &self,
        id: Uuid,
        comments: Vec<Comment>,
    ) -> Result<(), DomainError> {
        self.comments.replace(id, comments).await
    }
}
