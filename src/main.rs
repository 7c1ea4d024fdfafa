//! Catalog Summary - A caching REST facade over the Shopify Admin GraphQL API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_summary::api::{create_router, AppState};
use catalog_summary::credentials::load_credential;
use catalog_summary::shopify::ShopifyClient;
use catalog_summary::Config;

/// Main entry point for the catalog summary server.
///
/// # Startup Sequence
/// 1. Load `.env` if present and initialize tracing
/// 2. Load configuration from environment variables
/// 3. Read the Shopify credential; abort if it is missing
/// 4. Build the upstream client and shared state
/// 5. Serve HTTP until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_summary=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Catalog Summary Server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, db_path={}, cache_ttl={}ms, api_version={}",
        config.server_port,
        config.db_path.display(),
        config.cache_ttl_ms,
        config.api_version
    );

    // No credential, no traffic.
    let credential = load_credential(&config.db_path)
        .with_context(|| format!("loading credentials from {}", config.db_path.display()))?;

    let client = ShopifyClient::new(
        &credential,
        &config.api_version,
        config.upstream_timeout(),
    )?;
    let state = AppState::new(Arc::new(client), config.cache_ttl());

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
