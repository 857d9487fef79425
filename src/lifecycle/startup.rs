//! Startup orchestration.
//!
//! # Responsibilities
//! - Verify the frontend is deployed next to the binary
//! - Report progress and the serving URL to the operator on stdout
//! - Hold the console open after a fatal error when run interactively
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Operator output is plain stdout; structured logs go through tracing

use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;

use crate::config::{AssetsConfig, ValidationError};
use crate::net::ListenerError;
use crate::relay::RelayError;

/// Fatal startup failures. All of them end the process with status 1.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ValidationError>),

    #[error("missing required files: {}", join(.0))]
    MissingAssets(Vec<String>),

    #[error(transparent)]
    Bind(#[from] ListenerError),

    #[error("failed to build relay client: {0}")]
    Client(RelayError),

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Required files absent from the asset root, in configured order.
pub fn missing_assets(config: &AssetsConfig) -> Vec<String> {
    config
        .required_files
        .iter()
        .filter(|name| !config.root.join(name).is_file())
        .cloned()
        .collect()
}

/// Fail with `MissingAssets` unless every required file is present.
pub fn check_assets(config: &AssetsConfig) -> Result<(), StartupError> {
    let missing = missing_assets(config);
    if missing.is_empty() {
        tracing::debug!(root = %config.root.display(), "Required assets present");
        Ok(())
    } else {
        Err(StartupError::MissingAssets(missing))
    }
}

pub fn print_banner() {
    println!();
    println!("    ASSET RELAY v{}", env!("CARGO_PKG_VERSION"));
    println!("    {}", "=".repeat(50));
    println!();
}

pub fn print_ready(url: &str, open_browser: bool) {
    println!("[OK] File check complete");
    println!("[URL] Serving at: {}", url);
    if open_browser {
        println!("[BROWSER] The browser will open automatically");
    }
    println!("[STOP] Press Ctrl+C to stop");
    println!("{}", "=".repeat(50));
}

/// Print a fatal error and, on a terminal, wait for Enter so a
/// double-clicked binary does not vanish before the message is read.
pub fn report_fatal(err: &StartupError) {
    eprintln!("[ERROR] {}", err);
    if matches!(err, StartupError::MissingAssets(_)) {
        eprintln!("[HINT] Make sure all frontend files sit in the asset directory.");
    }
    pause_for_exit();
}

fn pause_for_exit() {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return;
    }
    print!("Press Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = stdin.lock().read_line(&mut line);
}
