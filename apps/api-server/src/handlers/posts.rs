//! Post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogit_core::PostPreview;
use blogit_core::domain::{AuthorRef, NewPost, Post, PostChanges};
use blogit_shared::ApiResponse;
use blogit_shared::dto::{
    CreatePostRequest, IndexQuery, PostResponse, PostSummary, UpdatePostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn summary(preview: PostPreview) -> PostSummary {
    let PostPreview {
        post,
        param,
        short_body,
        author_name,
        active,
    } = preview;

    PostSummary {
        id: post.id,
        param,
        title: post.title,
        short_body,
        author_name,
        state: post.state,
        active,
        tags: post.tags.into_iter().collect(),
        created_at: post.created_at,
    }
}

fn full(post: Post) -> PostResponse {
    let param = post.to_param();
    let (author_type, author_id) = match post.author {
        Some(author) => (Some(author.author_type), Some(author.id)),
        None => (None, None),
    };

    PostResponse {
        id: post.id,
        param,
        title: post.title,
        body: post.body,
        state: post.state,
        author_type,
        author_id,
        tags: post.tags.into_iter().collect(),
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// GET /api/posts?page=N
pub async fn index(
    state: web::Data<AppState>,
    query: web::Query<IndexQuery>,
) -> AppResult<HttpResponse> {
    let page = query.page.unwrap_or(1);
    if page == 0 {
        return Err(AppError::BadRequest("page numbers start at 1".to_string()));
    }

    let posts: Vec<PostSummary> = state
        .posts
        .index_page(page)
        .await?
        .into_iter()
        .map(summary)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/active
pub async fn active(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let mut posts = Vec::new();
    for post in state.posts.active().await? {
        posts.push(summary(state.posts.preview(post).await?));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.posts.find(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(full(post))))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create(NewPost {
            title: req.title,
            body: req.body,
            state: req.state,
            author: Some(AuthorRef::new(req.author_type, req.author_id)),
            project_id: req.project_id,
            tags: req.tags,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(full(post))))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .update(
            path.into_inner(),
            PostChanges {
                title: req.title,
                body: req.body,
                state: req.state,
                tags: req.tags,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(full(post))))
}

/// DELETE /api/posts/{id}
pub async fn destroy(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use blogit_core::{CommentBacking, ConfigHandle, Configuration};
    use blogit_infra::{Blogger, InMemoryAuthorDirectory, InMemoryPostRepository};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    async fn state_with_owner() -> (AppState, Blogger) {
        let authors = Arc::new(InMemoryAuthorDirectory::new());
        let owner = Blogger::new("Jeronimo", "jeronimo@example.com").owning(uuid::Uuid::new_v4());
        authors.register(Arc::new(owner.clone())).await;

        let state = AppState::with_repository(
            ConfigHandle::new(Configuration::default()),
            Arc::new(InMemoryPostRepository::new()),
            authors,
        );
        (state, owner)
    }

    fn create_body(owner: &Blogger, title: &str) -> Value {
        json!({
            "title": title,
            "body": "Body of a post created over HTTP",
            "author_type": "User",
            "author_id": owner.id,
            "tags": ["rust"],
        })
    }

    #[actix_rt::test]
    async fn test_create_then_list() {
        let (state, owner) = state_with_owner().await;
        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(create_body(&owner, "Created over HTTP"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["data"]["state"], "draft");

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed["data"][0]["author_name"], "Jeronimo");
        assert_eq!(listed["data"][0]["tags"][0], "rust");
    }

    #[actix_rt::test]
    async fn test_invalid_post_is_unprocessable() {
        let (state, owner) = state_with_owner().await;
        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(create_body(&owner, "too short"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["errors"]["title"].is_array());
    }

    #[actix_rt::test]
    async fn test_comments_forbidden_when_disabled() {
        let (state, owner) = state_with_owner().await;
        let config = state.config.clone();
        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(create_body(&owner, "Post with comments"))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{id}/comments"))
            .set_json(json!([{
                "name": "Reader",
                "email": "reader@example.com",
                "body": "Nice post",
            }]))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{id}/comments"))
            .to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed["data"][0]["name"], "Reader");

        config.update(|c| c.comment_backing = CommentBacking::Disabled);
        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{id}/comments"))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::FORBIDDEN
        );
    }

    #[actix_rt::test]
    async fn test_unknown_post_is_not_found() {
        let (state, _) = state_with_owner().await;
        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", uuid::Uuid::new_v4()))
            .to_request();

        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}
