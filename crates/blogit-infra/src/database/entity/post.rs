//! Post entity for SeaORM.

use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blogit_core::domain::{AuthorRef, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogit_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub state: Option<String>,
    pub author_type: Option<String>,
    pub author_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

// Authors and projects belong to the host application, so no foreign keys here.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post. Tags live in the tag store.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            body: model.body,
            state: model.state,
            author: model
                .author_type
                .zip(model.author_id)
                .map(|(author_type, id)| AuthorRef::new(author_type, id)),
            project_id: model.project_id,
            tags: Default::default(),
            created_at: Some(model.created_at.into()),
            updated_at: Some(model.updated_at.into()),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
///
/// Unsaved posts get their id and creation time here.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        let now = Utc::now();
        let (author_type, author_id) = match post.author {
            Some(author) => (Some(author.author_type), Some(author.id)),
            None => (None, None),
        };
        Self {
            id: Set(post.id.unwrap_or_else(Uuid::new_v4)),
            title: Set(post.title),
            body: Set(post.body),
            state: Set(post.state),
            author_type: Set(author_type),
            author_id: Set(author_id),
            project_id: Set(post.project_id),
            created_at: Set(post.created_at.unwrap_or(now).into()),
            updated_at: Set(now.into()),
        }
    }
}
