//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (relay counters and latency histogram)
//!
//! Consumers:
//!     → stdout (human-readable or JSON lines)
//!     → Prometheus scrape endpoint (only when an address is configured)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every relay log event
//! - Metrics are cheap; without an installed recorder they are no-ops

pub mod logging;
pub mod metrics;
