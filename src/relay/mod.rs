//! Relay subsystem: forwards a caller-described HTTP request to an arbitrary
//! origin and hands back the raw result.
//!
//! # Data Flow
//! ```text
//! POST body (JSON, decoded leniently)
//!     → request.rs (RelayRequest: defaults, validation, outbound header policy)
//!     → client.rs (one reqwest call, bounded by the relay timeout)
//!     → headers.rs (drop framing headers from the upstream reply)
//!     → RelayResponse (status, headers, bytes) or RelayError
//! ```
//!
//! # Design Decisions
//! - Stateless: nothing survives a call apart from the shared client
//! - Two error classes only, validation (400) and transport (500)

pub mod client;
pub mod error;
pub mod headers;
pub mod request;

pub use client::{Relay, RelayResponse};
pub use error::RelayError;
pub use request::RelayRequest;
