//! HTTP front door subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, CORS, trace, JSON body parsing)
//!     → /health (liveness, no dependency probes)
//!     → /api/*  (item handlers)
//!     → fallback (static asset directory)
//! ```
//!
//! # Design Decisions
//! - Pure configuration-and-dispatch shell; no retry, timeout, or
//!   circuit breaking in the request path
//! - Static serving stands in for a CDN-fronted bucket in production
//! - Shutdown is graceful: stop accepting, drain, return

pub mod server;

pub use server::HttpServer;
