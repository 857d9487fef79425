//! asset-relay: serve a bundled frontend and relay its outbound HTTP calls.
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser ──GET /, /<path>──▶ ┌───────────────────────────┐
//!                               │  http::HttpServer (axum)  │◀── net::bind_listener
//!   Browser ──POST /api/proxy─▶ │   assets │ health │ relay │        (ephemeral port)
//!                               └─────────────────────┬─────┘
//!                                                     │ reqwest, 120 s timeout
//!                                                     ▼
//!                                               target origin
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use asset_relay::config::{validate_config, ServerConfig};
use asset_relay::http::HttpServer;
use asset_relay::lifecycle::{browser, startup, Shutdown, StartupError};
use asset_relay::net::{bind_listener, local_url};
use asset_relay::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "asset-relay", version)]
#[command(about = "Serve a local frontend and relay its outbound HTTP requests", long_about = None)]
struct Cli {
    /// Directory holding the frontend files [default: the executable's directory]
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind; 0 lets the OS choose
    #[arg(short, long, default_value_t = 0)]
    port: u16,

    /// Do not open a browser once the server is up
    #[arg(long)]
    no_browser: bool,

    /// Delay before opening the browser, in milliseconds
    #[arg(long, default_value_t = 1500)]
    browser_delay_ms: u64,

    /// Upper bound for one relayed call, in seconds
    #[arg(long, default_value_t = 120)]
    relay_timeout_secs: u64,

    /// Path the relay endpoint is mounted on
    #[arg(long, default_value = "/api/proxy")]
    relay_route: String,

    /// Grace period for in-flight requests after Ctrl+C, in seconds
    #[arg(long, default_value_t = 5)]
    drain_timeout_secs: u64,

    /// Document served at `/`, relative to the asset root
    #[arg(long, default_value = "index.html")]
    entry_document: String,

    /// File that must exist under the asset root (repeatable; replaces the defaults)
    #[arg(long = "required-file", value_name = "NAME")]
    required_files: Vec<String>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit JSON log lines
    #[arg(long)]
    log_json: bool,

    /// Expose Prometheus metrics on this address
    #[arg(long)]
    metrics_address: Option<String>,
}

impl Cli {
    fn into_config(self) -> ServerConfig {
        let mut config = ServerConfig::default();
        if let Some(root) = self.assets {
            config.assets.root = root;
        }
        config.listener.host = self.host;
        config.listener.port = self.port;
        config.browser.enabled = !self.no_browser;
        config.browser.delay_ms = self.browser_delay_ms;
        config.listener.drain_timeout_secs = self.drain_timeout_secs;
        config.relay.timeout_secs = self.relay_timeout_secs;
        config.relay.route = self.relay_route;
        config.assets.entry_document = self.entry_document;
        if !self.required_files.is_empty() {
            config.assets.required_files = self.required_files;
        }
        config.observability.log_level = self.log_level;
        config.observability.log_json = self.log_json;
        config.observability.metrics_address = self.metrics_address;
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Cli::parse().into_config();
    logging::init(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "asset-relay starting");

    match run(config).await {
        Ok(()) => {
            println!("\n[EXIT] Server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            startup::report_fatal(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ServerConfig) -> Result<(), StartupError> {
    validate_config(&config).map_err(StartupError::InvalidConfig)?;

    startup::print_banner();
    startup::check_assets(&config.assets)?;

    if let Some(address) = &config.observability.metrics_address {
        match address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %address,
                "Failed to parse metrics address"
            ),
        }
    }

    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        asset_root = %config.assets.root.display(),
        relay_timeout_secs = config.relay.timeout_secs,
        "Configuration loaded"
    );
    match serde_json::to_string(&config) {
        Ok(effective) => tracing::debug!(config = %effective, "Effective configuration"),
        Err(e) => tracing::debug!(error = %e, "Failed to serialize configuration"),
    }

    let listener = bind_listener(&config.listener).await?;
    let url = local_url(listener.local_addr()?);
    startup::print_ready(&url, config.browser.enabled);

    if config.browser.enabled {
        browser::spawn_delayed_open(url, Duration::from_millis(config.browser.delay_ms));
    }

    let server = HttpServer::new(config)?;
    let shutdown = Shutdown::new();
    shutdown.watch_ctrl_c();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
