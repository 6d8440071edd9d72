//! Blog configuration and the shared handle every component reads through.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Where a post's comments come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentBacking {
    /// Comments are stored alongside posts and served by the comment store.
    Native,
    /// Comments are switched off.
    Disabled,
    /// Comments are rendered by a third-party widget; posts hold none.
    External,
}

impl CommentBacking {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Disabled => "disabled",
            Self::External => "external",
        }
    }
}

impl fmt::Display for CommentBacking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentBacking {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" | "active_record" => Ok(Self::Native),
            "disabled" | "no" | "none" => Ok(Self::Disabled),
            "external" | "disqus" => Ok(Self::External),
            other => Err(format!("unknown comment backing: {other}")),
        }
    }
}

/// Blog configuration supplied by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// States for posts that are not visible yet. The first one is the default state.
    pub hidden_states: Vec<String>,
    /// States for posts that are visible.
    pub active_states: Vec<String>,
    /// Page size for the index listing.
    pub posts_per_page: usize,
    /// Name of the author capability that yields a display name.
    pub author_display_name_capability: String,
    pub comment_backing: CommentBacking,
    /// The one state value the active listing filters on.
    pub published_marker: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            hidden_states: vec!["draft".to_string(), "archive".to_string()],
            active_states: vec!["published".to_string()],
            posts_per_page: 5,
            author_display_name_capability: "username".to_string(),
            comment_backing: CommentBacking::Native,
            published_marker: "published".to_string(),
        }
    }
}

/// Shared, mutable access to the current [`Configuration`].
///
/// Cloning the handle shares the underlying value, so a change made through
/// one clone is visible to every component on its next read.
#[derive(Debug, Clone, Default)]
pub struct ConfigHandle {
    inner: Arc<RwLock<Configuration>>,
}

impl ConfigHandle {
    pub fn new(config: Configuration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Run `f` against the configuration as it is right now.
    pub fn read<R>(&self, f: impl FnOnce(&Configuration) -> R) -> R {
        f(&self.inner.read())
    }

    /// Copy of the current configuration.
    pub fn snapshot(&self) -> Configuration {
        self.inner.read().clone()
    }

    /// Mutate the configuration in place.
    pub fn update(&self, f: impl FnOnce(&mut Configuration)) {
        let mut config = self.inner.write();
        f(&mut config);
        tracing::debug!(?config, "Blog configuration updated");
    }

    /// Replace the whole configuration.
    pub fn replace(&self, config: Configuration) {
        *self.inner.write() = config;
    }
}

impl From<Configuration> for ConfigHandle {
    fn from(config: Configuration) -> Self {
        Self::new(config)
    }
}
