//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use blogit_core::{CommentBacking, Configuration};
use blogit_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// JSON file listing the bloggers known to this host.
    pub authors_file: Option<PathBuf>,
    pub blog: Configuration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let mut config = DatabaseConfig::new(url);
            if let Some(max) = parse_var("DB_MAX_CONNECTIONS") {
                config.max_connections = max;
            }
            if let Some(min) = parse_var("DB_MIN_CONNECTIONS") {
                config.min_connections = min;
            }
            config
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            authors_file: env::var("BLOGIT_AUTHORS_FILE").ok().map(PathBuf::from),
            blog: Self::blog_from_env(),
        }
    }

    /// Blog settings from `BLOGIT_*` variables, falling back to the defaults.
    fn blog_from_env() -> Configuration {
        let defaults = Configuration::default();

        Configuration {
            hidden_states: list_var("BLOGIT_HIDDEN_STATES").unwrap_or(defaults.hidden_states),
            active_states: list_var("BLOGIT_ACTIVE_STATES").unwrap_or(defaults.active_states),
            posts_per_page: parse_var("BLOGIT_POSTS_PER_PAGE")
                .filter(|n| *n > 0)
                .unwrap_or(defaults.posts_per_page),
            author_display_name_capability: env::var("BLOGIT_AUTHOR_NAME_CAPABILITY")
                .unwrap_or(defaults.author_display_name_capability),
            comment_backing: parse_var::<CommentBacking>("BLOGIT_COMMENTS")
                .unwrap_or(defaults.comment_backing),
            published_marker: env::var("BLOGIT_PUBLISHED_MARKER")
                .unwrap_or(defaults.published_marker),
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

/// Comma-separated list; `None` when unset or empty.
fn list_var(key: &str) -> Option<Vec<String>> {
    env::var(key).ok().and_then(|value| parse_list(&value))
}

fn parse_list(value: &str) -> Option<Vec<String>> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    (!items.is_empty()).then_some(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_list(" draft, archive ,,"),
            Some(vec!["draft".to_string(), "archive".to_string()])
        );
        assert_eq!(parse_list(" , "), None);
    }
}
