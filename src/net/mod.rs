//! Network layer: binding the local listener.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (host, port; 0 = ephemeral)
//!     → listener.rs (bind once, read back the OS-assigned port)
//!     → same socket handed to http::HttpServer::run
//! ```

pub mod listener;

pub use listener::{bind_listener, local_url, ListenerError};
