//! Persistence subsystem.
//!
//! # Data Flow
//! ```text
//! DatabaseConfig
//!     → ItemStore::connect (pool built once, connections on demand)
//!     → list / create (single autocommitted statements)
//!     → close on shutdown (pool drained)
//! ```
//!
//! # Design Decisions
//! - The store handle is constructed in main and injected; no globals
//! - Every query binds parameters, never concatenates SQL
//! - No retry and no multi-statement transactions; failures surface as-is

pub mod item;

pub use item::Item;

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// How long a query waits for a pooled connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle over the pooled Postgres connection.
///
/// Cheap to clone; all clones share one pool.
#[derive(Clone)]
pub struct ItemStore {
    pool: PgPool,
}

impl ItemStore {
    /// Build the connection pool from config.
    ///
    /// Connections are acquired lazily on first query, so the process
    /// starts (and `/health` answers) even with the database down.
    pub fn connect(config: &DatabaseConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.name)
            .username(&config.user)
            .password(&config.password)
            // TLS when offered, certificates unverified. Development posture.
            .ssl_mode(PgSslMode::Prefer);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy_with(options);

        Self { pool }
    }

    /// Fetch every item, in the store's default order.
    pub async fn list(&self) -> Result<Vec<Item>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM items").fetch_all(&self.pool).await
    }

    /// Insert one item and return the stored row, id assigned by the store.
    pub async fn create(&self, name: &str) -> Result<Item, sqlx::Error> {
        sqlx::query_as("INSERT INTO items (name) VALUES ($1) RETURNING *")
            .bind(name)
            .fetch_one(&self.pool)
            .await
    }

    /// The underlying pool, for maintenance statements outside the two
    /// item operations (schema preparation in tests, one-off tooling).
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
