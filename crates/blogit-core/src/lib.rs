//! # Blogit Core
//!
//! Content model for a blog post embedded in a host application.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! validation, visibility states, author names, body previews and the listings,
//! plus the ports the host's collaborators implement.

pub mod author_name;
pub mod comments;
pub mod config;
pub mod domain;
pub mod error;
pub mod lifecycle;
pub mod ports;
pub mod preview;
pub mod scopes;
pub mod service;
pub mod validation;

pub use author_name::AuthorNameResolver;
pub use config::{CommentBacking, ConfigHandle, Configuration};
pub use error::{ConfigurationError, DomainError, FeatureDisabledError, RepoError};
pub use lifecycle::StateLifecycle;
pub use scopes::QueryScopes;
pub use service::{Collaborators, PostPreview, PostService};
pub use validation::{Phase, ValidationEngine, ValidationErrors};
