//! Display name of a post's author.

use crate::config::ConfigHandle;
use crate::domain::Author;
use crate::error::ConfigurationError;

/// Resolves an author's display name through the configured capability.
#[derive(Debug, Clone)]
pub struct AuthorNameResolver {
    config: ConfigHandle,
}

impl AuthorNameResolver {
    pub fn new(config: ConfigHandle) -> Self {
        Self { config }
    }

    /// Empty string when there is no author; an error when the author lacks the
    /// configured display-name capability.
    pub fn resolve(&self, author: Option<&dyn Author>) -> Result<String, ConfigurationError> {
        let Some(author) = author else {
            return Ok(String::new());
        };

        let capability = self
            .config
            .read(|c| c.author_display_name_capability.clone());

        author.display_name(&capability).ok_or_else(|| {
            let err = ConfigurationError {
                author_type: author.author_type().to_string(),
                capability,
            };
            tracing::error!(author_id = %author.id(), "{err}");
            err
        })
    }
}
