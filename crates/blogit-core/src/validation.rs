//! Validation rules for posts.
//!
//! Every rule lives in one table and is tagged with the phase it applies to.
//! Evaluation has no side effects; it only collects messages.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::config::{ConfigHandle, Configuration};
use crate::domain::{Author, Post};

pub const TITLE_MIN: usize = 10;
pub const TITLE_MAX: usize = 66;
pub const BODY_MIN: usize = 10;

/// Key for messages that don't belong to a single field.
pub const BASE: &str = "base";

const BLANK: &str = "can't be blank";
const NOT_INCLUDED: &str = "is not included in the list";
const NOT_OWNER: &str = "You are not a project owner";

/// Whether a post is being created or updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Create,
    Update,
}

/// Field name to violation messages. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages recorded for `field`; empty when the field is fine.
    pub fn on(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        self.fields.iter().map(|(field, msgs)| (*field, msgs.as_slice()))
    }

    /// Human-readable messages, prefixed with the field name except for base messages.
    pub fn full_messages(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(field, msgs)| {
                msgs.iter().map(move |msg| {
                    if field == BASE {
                        msg.clone()
                    } else {
                        format!("{} {}", capitalize(field), msg)
                    }
                })
            })
            .collect()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Applies {
    Always,
    OnCreate,
}

impl Applies {
    fn covers(self, phase: Phase) -> bool {
        match self {
            Applies::Always => true,
            Applies::OnCreate => phase == Phase::Create,
        }
    }
}

struct Subject<'a> {
    post: &'a Post,
    author: Option<&'a dyn Author>,
    config: &'a Configuration,
}

struct Rule {
    name: &'static str,
    applies: Applies,
    check: fn(&Subject<'_>, &mut ValidationErrors),
}

const RULES: &[Rule] = &[
    Rule {
        name: "title",
        applies: Applies::Always,
        check: check_title,
    },
    Rule {
        name: "body",
        applies: Applies::Always,
        check: check_body,
    },
    Rule {
        name: "author",
        applies: Applies::Always,
        check: check_author,
    },
    Rule {
        name: "state",
        applies: Applies::Always,
        check: check_state,
    },
    Rule {
        name: "only_owner",
        applies: Applies::OnCreate,
        check: check_only_owner,
    },
];

fn check_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    min: usize,
    max: Option<usize>,
) {
    if value.trim().is_empty() {
        errors.add(field, BLANK);
    }
    let len = value.chars().count();
    if len < min {
        errors.add(field, format!("is too short (minimum is {min} characters)"));
    }
    if let Some(max) = max.filter(|max| len > *max) {
        errors.add(field, format!("is too long (maximum is {max} characters)"));
    }
}

fn check_title(subject: &Subject<'_>, errors: &mut ValidationErrors) {
    check_length(
        errors,
        "title",
        &subject.post.title,
        TITLE_MIN,
        Some(TITLE_MAX),
    );
}

fn check_body(subject: &Subject<'_>, errors: &mut ValidationErrors) {
    check_length(errors, "body", &subject.post.body, BODY_MIN, None);
}

fn check_author(subject: &Subject<'_>, errors: &mut ValidationErrors) {
    if subject.post.author.is_none() {
        errors.add("author", BLANK);
    }
}

fn check_state(subject: &Subject<'_>, errors: &mut ValidationErrors) {
    match subject.post.state.as_deref().map(str::trim) {
        None | Some("") => errors.add("state", BLANK),
        Some(state) => {
            let config = subject.config;
            let known = config
                .hidden_states
                .iter()
                .chain(config.active_states.iter())
                .any(|s| s == state);
            if !known {
                errors.add("state", NOT_INCLUDED);
            }
        }
    }
}

fn check_only_owner(subject: &Subject<'_>, errors: &mut ValidationErrors) {
    // A missing author is already reported on the author field.
    if subject.post.author.is_none() {
        return;
    }
    // A reference that doesn't resolve owns nothing.
    let owns_any = subject
        .author
        .and_then(|author| author.owned_projects())
        .is_some_and(|projects| !projects.is_empty());
    if !owns_any {
        errors.add(BASE, NOT_OWNER);
    }
}

/// Evaluates the rule table against the live configuration.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    config: ConfigHandle,
}

impl ValidationEngine {
    pub fn new(config: ConfigHandle) -> Self {
        Self { config }
    }

    /// Run every rule that applies in `phase`.
    ///
    /// `author` is the resolved target of `post.author`, if it could be found.
    pub fn validate(
        &self,
        post: &Post,
        author: Option<&dyn Author>,
        phase: Phase,
    ) -> ValidationErrors {
        self.config.read(|config| {
            let subject = Subject {
                post,
                author,
                config,
            };
            let mut errors = ValidationErrors::new();
            for rule in RULES.iter().filter(|rule| rule.applies.covers(phase)) {
                tracing::trace!(rule = rule.name, "Running validation rule");
                (rule.check)(&subject, &mut errors);
            }
            if !errors.is_empty() {
                tracing::debug!(?phase, %errors, "Post failed validation");
            }
            errors
        })
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{AuthorRef, NewPost, ProjectRef};

    struct Writer {
        projects: Option<Vec<ProjectRef>>,
    }

    impl Author for Writer {
        fn author_type(&self) -> &str {
            "Writer"
        }

        fn id(&self) -> Uuid {
            Uuid::nil()
        }

        fn display_name(&self, _capability: &str) -> Option<String> {
            None
        }

        fn owned_projects(&self) -> Option<Vec<ProjectRef>> {
            self.projects.clone()
        }
    }

    fn owner() -> Writer {
        Writer {
            projects: Some(vec![ProjectRef(Uuid::new_v4())]),
        }
    }

    fn valid_post(config: &ConfigHandle) -> Post {
        Post::new(
            NewPost {
                title: "A perfectly fine title".into(),
                body: "A body that is long enough".into(),
                author: Some(AuthorRef::new("Writer", Uuid::nil())),
                ..NewPost::default()
            },
            config,
        )
    }

    fn engine() -> (ValidationEngine, ConfigHandle) {
        let config = ConfigHandle::default();
        (ValidationEngine::new(config.clone()), config)
    }

    #[test]
    fn test_valid_post_has_no_errors() {
        let (engine, config) = engine();
        let errors = engine.validate(&valid_post(&config), Some(&owner()), Phase::Create);
        assert!(errors.is_empty(), "unexpected errors: {errors}");
    }

    #[test]
    fn test_title_length_bounds() {
        let (engine, config) = engine();
        let author = owner();

        for len in [9, 67] {
            let mut post = valid_post(&config);
            post.title = "a".repeat(len);
            let errors = engine.validate(&post, Some(&author), Phase::Create);
            assert!(!errors.on("title").is_empty(), "title of {len} chars passed");
        }

        for len in [10, 40, 66] {
            let mut post = valid_post(&config);
            post.title = "a".repeat(len);
            let errors = engine.validate(&post, Some(&author), Phase::Create);
            assert!(errors.on("title").is_empty(), "title of {len} chars failed");
        }
    }

    #[test]
    fn test_title_length_counts_chars() {
        let (engine, config) = engine();
        let mut post = valid_post(&config);
        post.title = "ブログ記事のタイトルです".into();

        let errors = engine.validate(&post, Some(&owner()), Phase::Create);
        assert!(errors.on("title").is_empty());
    }

    #[test]
    fn test_short_or_blank_body_fails() {
        let (engine, config) = engine();
        for body in ["", "a", "a".repeat(9).as_str()] {
            let mut post = valid_post(&config);
            post.body = body.to_string();
            let errors = engine.validate(&post, Some(&owner()), Phase::Update);
            assert!(!errors.on("body").is_empty(), "body {body:?} passed");
        }
    }

    #[test]
    fn test_missing_author_is_one_error() {
        let (engine, config) = engine();
        let mut post = valid_post(&config);
        post.author = None;

        let errors = engine.validate(&post, None, Phase::Create);

        assert_eq!(errors.on("author"), ["can't be blank"]);
        assert!(errors.on(BASE).is_empty());
    }

    #[test]
    fn test_missing_state_is_exactly_one_error() {
        let (engine, config) = engine();
        for state in [None, Some(String::new())] {
            let mut post = valid_post(&config);
            post.state = state;
            let errors = engine.validate(&post, Some(&owner()), Phase::Update);
            assert_eq!(errors.on("state").len(), 1);
        }
    }

    #[test]
    fn test_unknown_state_fails_until_configured() {
        let (engine, config) = engine();
        let mut post = valid_post(&config);
        post.state = Some("featured".into());

        let errors = engine.validate(&post, Some(&owner()), Phase::Update);
        assert_eq!(errors.on("state"), ["is not included in the list"]);

        config.update(|c| c.active_states.push("featured".into()));
        let errors = engine.validate(&post, Some(&owner()), Phase::Update);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_only_owner_runs_on_create() {
        let (engine, config) = engine();
        let post = valid_post(&config);

        for projects in [None, Some(vec![])] {
            let author = Writer { projects };
            let errors = engine.validate(&post, Some(&author), Phase::Create);
            assert_eq!(errors.on(BASE), ["You are not a project owner"]);
        }
    }

    #[test]
    fn test_unresolved_author_is_not_an_owner() {
        let (engine, config) = engine();
        let post = valid_post(&config);

        let errors = engine.validate(&post, None, Phase::Create);
        assert_eq!(errors.on(BASE), ["You are not a project owner"]);
        assert!(errors.on("author").is_empty());

        assert!(engine.validate(&post, None, Phase::Update).is_empty());
    }

    #[test]
    fn test_only_owner_skipped_on_update() {
        let (engine, config) = engine();
        let post = valid_post(&config);
        let author = Writer {
            projects: Some(vec![]),
        };

        let errors = engine.validate(&post, Some(&author), Phase::Update);

        assert!(errors.is_empty());
    }

    #[test]
    fn test_full_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "can't be blank");
        errors.add(BASE, NOT_OWNER);

        assert_eq!(
            errors.full_messages(),
            vec!["You are not a project owner", "Title can't be blank"]
        );
        assert!(errors.into_result().is_err());
    }
}
