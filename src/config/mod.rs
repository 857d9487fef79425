//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults (schema.rs)
//!     → command-line overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → cloned into HttpServer / AppState
//! ```
//!
//! # Design Decisions
//! - No config file and no persisted state; the process is configured per run
//! - All fields have defaults so a bare invocation is a working deployment
//! - Validation separates syntactic (serde/clap) from semantic checks

pub mod schema;
pub mod validation;

pub use schema::AssetsConfig;
pub use schema::BrowserConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::RelayConfig;
pub use schema::ServerConfig;
pub use validation::{validate_config, ValidationError};
