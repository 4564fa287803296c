//! # logicd — logic service daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`logic.toml` + environment variables)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use logic_adapter_http_axum::state::AppState;
use logic_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteMenuRepository, SqliteRestaurantRepository,
};
use logic_app::services::menu_service::MenuService;
use logic_app::services::restaurant_service::RestaurantService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter()))
        .init();

    if let Some(issuer) = &config.service.jwt_issuer {
        tracing::info!(%issuer, "token issuer configured");
    }
    if let Some(url) = &config.service.search_service_url {
        tracing::info!(%url, "companion search service configured");
    }

    // Database
    let db = StorageConfig {
        database_url: config.database_url(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let restaurant_repo = SqliteRestaurantRepository::new(pool.clone());
    let menu_repo = SqliteMenuRepository::new(pool);

    // Services + HTTP
    let state = AppState::new(
        RestaurantService::new(restaurant_repo),
        MenuService::new(menu_repo),
    );
    let app = logic_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "logicd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
