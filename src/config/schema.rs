//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits so a configuration can be logged or dumped
//! as structured data.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration for the bootstrap server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind host, port).
    pub listener: ListenerConfig,

    /// Static asset settings.
    pub assets: AssetsConfig,

    /// Relay settings.
    pub relay: RelayConfig,

    /// Delayed browser launch.
    pub browser: BrowserConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind host (IP literal).
    pub host: String,

    /// Bind port. `0` asks the OS for an ephemeral port.
    pub port: u16,

    /// How long in-flight requests may drain after shutdown starts, in seconds.
    pub drain_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            drain_timeout_secs: 5,
        }
    }
}

impl ListenerConfig {
    pub fn drain_timeout(&self) -> Duration {
        Duration::from_secs(self.drain_timeout_secs)
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory the frontend is served from.
    pub root: PathBuf,

    /// Document served for `GET /`.
    pub entry_document: String,

    /// Files that must exist under `root` before the server starts.
    pub required_files: Vec<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: default_asset_root(),
            entry_document: "index.html".to_string(),
            required_files: ["index.html", "script.js", "api.js", "utils.js", "styles.css"]
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }
}

impl AssetsConfig {
    /// Absolute-or-relative path of the entry document.
    pub fn entry_path(&self) -> PathBuf {
        self.root.join(&self.entry_document)
    }
}

/// Directory of the running executable, or the current directory when that
/// cannot be determined.
fn default_asset_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Relay configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Route the relay is mounted on.
    pub route: String,

    /// Upper bound for one outbound call, in seconds.
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            route: "/api/proxy".to_string(),
            timeout_secs: 120,
        }
    }
}

impl RelayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Browser launch configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Open the default browser once the server is up.
    pub enabled: bool,

    /// Delay before the launch attempt, in milliseconds.
    pub delay_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_ms: 1500,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub log_json: bool,

    /// Prometheus exporter bind address. Disabled when unset.
    pub metrics_address: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
            metrics_address: None,
        }
    }
}
