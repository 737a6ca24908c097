//! Three-Tier Item Service
//!
//! A minimal three-tier web application built with Tokio and Axum:
//!
//! ```text
//! Browser (public/) ──HTTP──▶ Front Door (http) ──▶ API (api) ──SQL──▶ Postgres (store)
//! ```
//!
//! The front door serves the static client, applies CORS and request
//! tracing, and mounts the two item operations under /api. State lives
//! entirely in the database; this process is stateless.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use item_board::config;
use item_board::lifecycle::Shutdown;
use item_board::{HttpServer, ItemStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_board=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("item-board v0.1.0 starting");

    // Load configuration from the environment, once
    let config = config::load_from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        db_host = %config.database.host,
        db_port = config.database.port,
        pool_size = config.database.max_connections,
        "Configuration loaded"
    );

    // Build the store handle; connections are acquired on first query
    let store = ItemStore::connect(&config.database);

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    // Translate OS signals into a graceful shutdown
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    // Create and run the HTTP server
    let server = HttpServer::new(&config, store.clone());
    server.run(listener, server_shutdown).await?;

    // Release pooled connections before exit
    store.close().await;

    tracing::info!("Shutdown complete");
    Ok(())
}
