//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Check required assets → Bind listener → Print URL
//!
//! Browser (browser.rs):
//!     Detached task: wait → open default browser → log on failure
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or trigger → Stop accepting → Drain in-flight requests → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and exits with status 1
//! - The browser launch is advisory and never touches server lifecycle

pub mod browser;
pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::StartupError;
