// src/lib.rs
pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::sync::Arc;

use anyhow::{Context, Result};
use application::FlashcardService;
use config::ServerConfig;
use infrastructure::SqliteStore;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::cli::args::Args;

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting flashcard-api with arguments");
    let config = ServerConfig::from(&args);

    // Initialize infrastructure
    let store = SqliteStore::new(&config.database);
    let service = Arc::new(FlashcardService::new(store));
    check_store(Arc::clone(&service)).await;

    // Initialize presentation
    let app = ports::router(service, &config)?;
    let listener = TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.socket_addr()))?;

    info!(
        addr = %listener.local_addr()?,
        origin = %config.cors_origin,
        "Server running at http://localhost:{}/",
        config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

/// Report store reachability and create the table if missing.
///
/// Failures are logged only: requests made while the store is down fail on
/// their own.
async fn check_store(service: Arc<FlashcardService<SqliteStore>>) {
    let checked = tokio::task::spawn_blocking(move || {
        match service.probe() {
            Ok(version) => info!(%version, "Database connection successful"),
            Err(e) => error!(error = %e, "Failed to connect to the database"),
        }
        if let Err(e) = service.store().ensure_schema() {
            warn!(error = %e, "Could not ensure Flashcard table exists");
        }
    })
    .await;

    if let Err(e) = checked {
        error!(error = %e, "Store check did not complete");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
