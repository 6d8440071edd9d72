//! # Blogit API Server
//!
//! Example host application: serves the blog post model over Actix-web.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    telemetry::init_telemetry(&TelemetryConfig::from_env());

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Blogit API Server on {}:{}",
        config.host,
        config.port
    );
    tracing::debug!(blog = ?config.blog, "Blog configuration");

    // Build application state
    let state = AppState::new(&config).await?;

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
