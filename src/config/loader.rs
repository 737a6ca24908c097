//! Configuration loading from the process environment.

use crate::config::schema::{DatabaseConfig, ListenerConfig, ServiceConfig};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// A required variable was absent.
    Missing(&'static str),
    /// A variable was present but did not parse.
    Invalid(&'static str, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "required variable {} is not set", var),
            ConfigError::Invalid(var, value) => {
                write!(f, "variable {} has invalid value {:?}", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from the process environment.
///
/// Required: `DB_HOST`, `DB_NAME`, `DB_USER`, `DB_PASSWORD`.
/// Optional: `DB_PORT` (5432), `DB_MAX_CONNECTIONS` (5), `STATIC_DIR`
/// (`public`). Read once at startup; changes require a restart.
pub fn load_from_env() -> Result<ServiceConfig, ConfigError> {
    load_with(|var| std::env::var(var).ok())
}

fn load_with(lookup: impl Fn(&'static str) -> Option<String>) -> Result<ServiceConfig, ConfigError> {
    let defaults = ListenerConfig::default();
    let listener = ListenerConfig {
        bind_address: defaults.bind_address,
        static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
    };

    let database = DatabaseConfig {
        host: required(&lookup, "DB_HOST")?,
        port: parsed_or(&lookup, "DB_PORT", 5432)?,
        name: required(&lookup, "DB_NAME")?,
        user: required(&lookup, "DB_USER")?,
        password: required(&lookup, "DB_PASSWORD")?,
        max_connections: parsed_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
    };

    Ok(ServiceConfig { listener, database })
}

fn required(
    lookup: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
) -> Result<String, ConfigError> {
    lookup(var).ok_or(ConfigError::Missing(var))
}

fn parsed_or<T: std::str::FromStr>(
    lookup: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid(var, raw)),
        None => Ok(default),
    }
}
