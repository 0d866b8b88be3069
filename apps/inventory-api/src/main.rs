//! # Inventory API Server
//!
//! Loads configuration, starts an empty catalog and serves HTTP until
//! Ctrl+C or SIGTERM.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use inventory_api::{router, shutdown, ApiConfig, AppState};
use inventory_store::SharedCatalog;

const DEFAULT_LOG_FILTER: &str = "info,inventory=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .init();

    info!("Starting Inventory API server...");

    // Load configuration
    let config = ApiConfig::load().context("failed to load configuration")?;
    info!(
        addr = %config.socket_addr(),
        default_page_size = config.default_page_size,
        "Configuration loaded"
    );

    let addr = config.socket_addr();
    let app = router(AppState::new(SharedCatalog::new(), config));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = shutdown::signal().await {
                // keep serving; the process can still be killed
                error!(error = %e, "Shutdown signal handler failed");
                std::future::pending::<()>().await;
            }
        })
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}
