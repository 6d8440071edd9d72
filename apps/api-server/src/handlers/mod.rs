//! HTTP handlers and route configuration.

mod comments;
mod config;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Blog settings
            .route("/config", web::get().to(config::show))
            .route("/config", web::put().to(config::replace))
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::index))
                    .route("", web::post().to(posts::create))
                    .route("/active", web::get().to(posts::active))
                    .route("/{id}", web::get().to(posts::show))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::destroy))
                    .route("/{id}/comments", web::get().to(comments::index))
                    .route("/{id}/comments", web::put().to(comments::replace)),
            ),
    );
}
