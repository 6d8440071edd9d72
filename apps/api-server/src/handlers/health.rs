//! Liveness endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use blogit_core::CommentBacking;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// How comments are served right now.
    pub comments: CommentBacking,
    pub published_marker: String,
    pub timestamp: String,
}

/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (comments, published_marker) = state
        .config
        .read(|c| (c.comment_backing, c.published_marker.clone()));

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        comments,
        published_marker,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
