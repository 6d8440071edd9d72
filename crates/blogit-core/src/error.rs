//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

use crate::config::CommentBacking;
use crate::validation::ValidationErrors;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    FeatureDisabled(#[from] FeatureDisabledError),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// The author behind a post doesn't expose the configured display-name capability.
///
/// This points at a host integration bug rather than bad data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{author_type}#{capability} is not defined")]
pub struct ConfigurationError {
    pub author_type: String,
    pub capability: String,
}

/// Comments were touched while the blog isn't configured for native comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Posts only allow native comments (check blogit configuration, comments are {mode})")]
pub struct FeatureDisabledError {
    pub mode: CommentBacking,
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
