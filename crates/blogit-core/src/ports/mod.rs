//! Ports - trait definitions for external collaborators.
//! These are the "interfaces" the host application or infrastructure must implement.

mod authors;
mod comments;
mod repository;
mod tagging;

pub use authors::AuthorDirectory;
pub use comments::CommentStore;
pub use repository::{BaseRepository, PostOrder, PostQuery, PostRepository};
pub use tagging::TagStore;
