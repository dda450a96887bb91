//! pokedex-server: serves the Pokedex API over HTTP.
//!
//! Reads config from env vars:
//!   POKEDEX_DATA_FILE    dataset file (default: data.json)
//!   POKEDEX_BIND_ADDR    listen address (default: 127.0.0.1:5000)
//!   POKEDEX_PRETTY_JSON  indent JSON responses (default: true)
//!   RUST_LOG             log filter (default: info,pokedex_server=debug)

use std::sync::Arc;

use anyhow::{Context, Result};
use pokedex_data::Dataset;
use pokedex_server::{build_router, AppState, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pokedex_server=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    let dataset = Dataset::load(&config.data_file)
        .with_context(|| format!("Failed to load dataset from {}", config.data_file.display()))?;
    tracing::info!(
        path = %config.data_file.display(),
        pokemons = dataset.pokemons().len(),
        types = dataset.types().len(),
        moves = dataset.moves().len(),
        "Dataset loaded"
    );

    let app = build_router(AppState::new(Arc::new(dataset), config.pretty_json));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "Pokedex API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
