//! Cloud Ranker HTTP server.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cloud_ranker::adapters::http::{app_router, with_middleware, ApiHandlers};
use cloud_ranker::adapters::storage::{FileAlternativeTable, FileHistoryRepository};
use cloud_ranker::application::{AlternativeStore, HistoryStore};
use cloud_ranker::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server);

    let table = FileAlternativeTable::new(config.storage.catalog_path());
    let history = FileHistoryRepository::new(config.storage.history_path());
    info!(
        catalog = %table.path().display(),
        history = %history.path().display(),
        "Opening stores"
    );

    let alternatives = Arc::new(AlternativeStore::open(Arc::new(table)).await?);
    let history = Arc::new(HistoryStore::open(Arc::new(history)).await?);

    let app = with_middleware(
        app_router(ApiHandlers::new(alternatives, history)),
        &config.server,
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Cloud Ranker API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if server.is_production() {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
