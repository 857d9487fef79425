//! Local bootstrap server: serves a bundled frontend from disk and relays
//! outbound HTTP calls on its behalf, so the page never hits cross-origin
//! restrictions.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod relay;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::{Relay, RelayError, RelayRequest, RelayResponse};
