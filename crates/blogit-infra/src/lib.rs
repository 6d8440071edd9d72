//! # Blogit Infrastructure
//!
//! Concrete implementations of the ports defined in `blogit-core`.
//! This crate contains post storage plus the tag, comment and author collaborators.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL post storage via SeaORM

pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use memory::{
    Blogger, InMemoryAuthorDirectory, InMemoryCommentStore, InMemoryPostRepository,
    InMemoryTagStore,
};

pub use database::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
