//! API handler subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request (under /api)
//!     → handlers.rs (typed extraction, boundary validation)
//!     → store (single parameterized query)
//!     → JSON response, or error.rs mapping to {"error": <msg>}
//! ```
//!
//! # Design Decisions
//! - Request and response bodies are typed structs, not loose JSON
//! - Validation happens before any store call
//! - Every failure is logged before the response is written

pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::{router, CreateItem};
