//! Visibility states of a post, derived from the blog configuration.

use crate::config::{ConfigHandle, Configuration};
use crate::domain::Post;

/// First configured hidden state.
pub fn default_state(config: &Configuration) -> Option<String> {
    config.hidden_states.first().cloned()
}

/// Hidden states followed by active states, in configured order.
pub fn available_status(config: &Configuration) -> Vec<String> {
    config
        .hidden_states
        .iter()
        .chain(config.active_states.iter())
        .cloned()
        .collect()
}

/// Reads state rules from the live configuration on every call.
#[derive(Debug, Clone)]
pub struct StateLifecycle {
    config: ConfigHandle,
}

impl StateLifecycle {
    pub fn new(config: ConfigHandle) -> Self {
        Self { config }
    }

    /// State given to a new post that doesn't name one.
    pub fn default_state(&self) -> Option<String> {
        self.config.read(default_state)
    }

    /// Every state a post may be in.
    pub fn available_status(&self) -> Vec<String> {
        self.config.read(available_status)
    }

    pub fn is_available(&self, state: &str) -> bool {
        self.config.read(|c| {
            c.hidden_states
                .iter()
                .chain(c.active_states.iter())
                .any(|s| s == state)
        })
    }

    /// Whether the post is in the published-marker state.
    ///
    /// Only the single marker counts, not every configured active state; this
    /// matches what the active listing returns.
    pub fn is_active(&self, post: &Post) -> bool {
        self.config
            .read(|c| post.state.as_deref() == Some(c.published_marker.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPost;

    fn post_in(state: &str, config: &ConfigHandle) -> Post {
        Post::new(
            NewPost {
                state: Some(state.to_string()),
                ..NewPost::default()
            },
            config,
        )
    }

    #[test]
    fn test_available_status_is_hidden_then_active() {
        let lifecycle = StateLifecycle::new(ConfigHandle::default());

        assert_eq!(
            lifecycle.available_status(),
            vec!["draft", "archive", "published"]
        );
    }

    #[test]
    fn test_available_status_follows_reconfiguration() {
        let config = ConfigHandle::default();
        let lifecycle = StateLifecycle::new(config.clone());

        config.update(|c| c.active_states.push("featured".into()));

        assert_eq!(
            lifecycle.available_status(),
            vec!["draft", "archive", "published", "featured"]
        );
        assert!(lifecycle.is_available("featured"));
        assert!(!lifecycle.is_available("deleted"));
    }

    #[test]
    fn test_default_state() {
        let config = ConfigHandle::default();
        let lifecycle = StateLifecycle::new(config.clone());
        assert_eq!(lifecycle.default_state().as_deref(), Some("draft"));

        config.update(|c| c.hidden_states.clear());
        assert_eq!(lifecycle.default_state(), None);
    }

    #[test]
    fn test_is_active_uses_only_the_published_marker() {
        let config = ConfigHandle::default();
        config.update(|c| c.active_states.push("featured".into()));
        let lifecycle = StateLifecycle::new(config.clone());

        assert!(lifecycle.is_active(&post_in("published", &config)));
        assert!(!lifecycle.is_active(&post_in("featured", &config)));
        assert!(!lifecycle.is_active(&post_in("draft", &config)));
    }
}
