//! In-memory collaborators - used when no database is configured, and in tests.
//!
//! Note: data is lost on process restart.

mod authors;
mod comments;
mod posts;
mod tags;

pub use authors::{Blogger, InMemoryAuthorDirectory};
pub use comments::InMemoryCommentStore;
pub use posts::InMemoryPostRepository;
pub use tags::InMemoryTagStore;
