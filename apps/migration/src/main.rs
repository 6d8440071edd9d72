//! Applies or rolls back the blog schema. Reads `DATABASE_URL` like the server.

use sea_orm_migration::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(table = "blogit_posts", "Running blog schema migrations");
    cli::run_cli(migration::Migrator).await;
}
