//! Domain entities - the core business objects.

mod author;
mod comment;
mod post;

pub use author::{Author, AuthorRef, ProjectRef};
pub use comment::Comment;
pub use post::{NewPost, Post, PostChanges};
