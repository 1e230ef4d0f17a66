//! Claims Desk - API Server Binary
//!
//! This binary starts the HTTP API server for the claims desk.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claims-desk-api
//!
//! # Run with environment variables
//! API_PORT=9090 API_STORAGE_DIR=/var/lib/claims cargo run --bin claims-desk-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_JWT_SECRET` - JWT signing secret (required in production)
//! * `API_JWT_EXPIRATION_SECS` - JWT token expiration in seconds (default: 3600)
//! * `API_STORAGE_DIR` - Directory for the persisted claim collection (default: ./data)
//! * `API_DECISION_DELAY_MS` - Simulated decision latency (default: 2000)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_AGENT_NAME`, `API_AGENT_ROLE` - Profile shown when the token has no name

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use infra_storage::{FileKeyValueStore, StorageConfig};
use interface_api::{config::ApiConfig, create_router, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, opens claim storage,
/// and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let (config, config_error) = match ApiConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (ApiConfig::default(), Some(e)),
    };

    init_tracing(&config.log_level);

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Invalid environment configuration, using defaults");
    }

    tracing::info!(
        host = %config.host,
        port = config.port,
        storage_dir = %config.storage_dir.display(),
        decision_delay_ms = config.decision_delay_ms,
        "Starting Claims Desk API Server"
    );

    let storage = FileKeyValueStore::open(StorageConfig::new(&config.storage_dir).create_if_missing(true))
        .with_context(|| format!("opening claim storage at {}", config.storage_dir.display()))?;

    let state =
        AppState::new(Arc::new(storage), config.clone()).context("building application state")?;
    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("parsing server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
