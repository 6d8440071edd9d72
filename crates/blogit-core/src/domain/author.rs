use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Polymorphic pointer to whoever wrote a post: the author's type plus its id.
///
/// Posts never own their author; the host resolves the reference through an
/// [`AuthorDirectory`](crate::ports::AuthorDirectory).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorRef {
    pub author_type: String,
    pub id: Uuid,
}

impl AuthorRef {
    pub fn new(author_type: impl Into<String>, id: Uuid) -> Self {
        Self {
            author_type: author_type.into(),
            id,
        }
    }
}

impl fmt::Display for AuthorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.author_type, self.id)
    }
}

/// Pointer to a project owned by an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectRef(pub Uuid);

/// Capabilities an author must expose to write posts.
///
/// Implemented by each concrete author type of the host application. The blog
/// never branches on the concrete type; it only asks for these capabilities.
pub trait Author: Send + Sync {
    /// Type name, as stored in [`AuthorRef::author_type`].
    fn author_type(&self) -> &str;

    fn id(&self) -> Uuid;

    /// Value of the named display-name accessor, or `None` if the author has
    /// no accessor by that name.
    fn display_name(&self, capability: &str) -> Option<String>;

    /// Projects this author owns. `None` means the author has no project
    /// ownership at all.
    fn owned_projects(&self) -> Option<Vec<ProjectRef>>;

    fn to_ref(&self) -> AuthorRef {
        AuthorRef::new(self.author_type(), self.id())
    }
}
