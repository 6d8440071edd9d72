//! Blog settings handlers.

use actix_web::{HttpResponse, web};

use blogit_core::Configuration;
use blogit_shared::ApiResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/config
pub async fn show(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(state.config.snapshot()))
}

/// PUT /api/config - takes effect on the next request.
pub async fn replace(
    state: web::Data<AppState>,
    body: web::Json<Configuration>,
) -> AppResult<HttpResponse> {
    let config = body.into_inner();
    if config.posts_per_page == 0 {
        return Err(AppError::BadRequest(
            "posts_per_page must be at least 1".to_string(),
        ));
    }

    tracing::info!(?config, "Replacing blog configuration");
    state.config.replace(config.clone());

    Ok(HttpResponse::Ok().json(ApiResponse::ok(config)))
}
