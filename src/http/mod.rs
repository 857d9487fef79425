//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (net::listener)
//!     → server.rs (Axum router, middleware)
//!     → request.rs (x-request-id assigned and propagated)
//!     → handlers.rs
//!         GET /health      → liveness payload
//!         POST /api/proxy  → relay subsystem
//!     → assets.rs
//!         GET /            → entry document
//!         GET /<path>      → file under the asset root
//! ```

pub mod assets;
pub mod handlers;
pub mod request;
pub mod server;

pub use request::{request_id, X_REQUEST_ID};
pub use server::{AppState, HttpServer};

/// Liveness route.
pub const HEALTH_ROUTE: &str = "/health";
