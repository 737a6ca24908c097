//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env file)
//!     → loader.rs (read & parse variables)
//!     → ServiceConfig (validated, immutable)
//!     → shared with the server and store at startup
//! ```
//!
//! # Design Decisions
//! - Config is read exactly once at process start; no reload path
//! - Required database variables fail startup with a named error
//! - The listening address is fixed; only the store connection is tunable

pub mod loader;
pub mod schema;

pub use loader::{load_from_env, ConfigError};
pub use schema::DatabaseConfig;
pub use schema::ListenerConfig;
pub use schema::ServiceConfig;
