//! Configuration schema definitions.
//!
//! All types derive Serde traits so a config snapshot can be logged or
//! dumped; values themselves come from the environment via the loader.

use serde::{Deserialize, Serialize};

/// Root configuration for the item service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address, static assets).
    pub listener: ListenerConfig,

    /// Database connection settings.
    pub database: DatabaseConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address. The listening port is fixed for this service.
    pub bind_address: String,

    /// Directory served as static assets (the browser front end).
    pub static_dir: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            static_dir: "public".to_string(),
        }
    }
}

/// Database connection settings.
///
/// TLS is attempted when the server offers it but certificates are not
/// verified. That matches the development posture this service ships
/// with; production deployments should front it with verified TLS.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database host.
    pub host: String,

    /// Database port.
    pub port: u16,

    /// Database name.
    pub name: String,

    /// Database user.
    pub user: String,

    /// Database password. Skipped when serializing a config snapshot.
    #[serde(skip_serializing)]
    pub password: String,

    /// Maximum pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            name: "items".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
            max_connections: 5,
        }
    }
}
