//! Three-tier item service library.

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod store;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{Item, ItemStore};
