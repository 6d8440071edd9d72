//! Comment handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogit_core::domain::Comment;
use blogit_shared::ApiResponse;
use blogit_shared::dto::{CommentRequest, CommentResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn response(comment: Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        name: comment.name,
        website: comment.website,
        body: comment.body,
        created_at: comment.created_at,
    }
}

/// GET /api/posts/{id}/comments
pub async fn index(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    // 404 for unknown posts before the comment gate is consulted
    state.posts.find(id).await?;

    let comments: Vec<CommentResponse> = state
        .posts
        .comments(id)
        .await?
        .into_iter()
        .map(response)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(comments)))
}

/// PUT /api/posts/{id}/comments
pub async fn replace(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<Vec<CommentRequest>>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.find(id).await?;

    let comments: Vec<Comment> = body
        .into_inner()
        .into_iter()
        .map(|req| {
            let comment = Comment::new(id, req.name, req.email, req.body);
            match req.website {
                Some(website) => comment.with_website(website),
                None => comment,
            }
        })
        .collect();
    state.posts.replace_comments(id, comments.clone()).await?;

    let comments: Vec<CommentResponse> = comments.into_iter().map(response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(comments)))
}
