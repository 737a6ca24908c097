//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (CORS, tracing)
//! - Serve the static front end
//! - Mount the API handlers under /api
//! - Bind the server to a listener and run until shutdown

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::ServiceConfig;
use crate::store::ItemStore;

/// HTTP server for the item service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: &ServiceConfig, store: ItemStore) -> Self {
        let router = Self::build_router(config, store);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, store: ItemStore) -> Router {
        Router::new()
            .route("/health", get(health))
            .nest("/api", api::router())
            .fallback_service(ServeDir::new(&config.listener.static_dir))
            .with_state(store)
            // The front end may be served from another origin in
            // production, so cross-site calls are allowed wholesale.
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections until the shutdown signal.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

/// Liveness check. Answers without probing the store.
async fn health() -> Json<Health> {
    Json(Health { status: "healthy" })
}
