//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, request ID)
//! - Mount static assets, liveness and the relay route
//! - Serve on an already bound listener until shutdown

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, get_service, post},
    Router,
};
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, watch};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::{assets, handlers, request, HEALTH_ROUTE};
use crate::lifecycle::StartupError;
use crate::relay::Relay;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

/// The local server: one router value built at startup.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self, StartupError> {
        let relay = Relay::new(config.relay.timeout()).map_err(StartupError::Client)?;
        let state = AppState {
            relay: Arc::new(relay),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get_service(assets::entry_service(&config.assets)))
            .route(HEALTH_ROUTE, get(handlers::health))
            .route(
                &config.relay.route,
                post(handlers::relay).layer(DefaultBodyLimit::disable()),
            )
            .fallback_service(assets::asset_service(&config.assets))
            .with_state(state)
            .layer(request::propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(request::set_request_id_layer())
    }

    /// A clone of the router, for driving the server in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown trigger fires.
    ///
    /// In-flight requests get `listener.drain_timeout_secs` to finish; a relay
    /// still waiting on its upstream after that is abandoned.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let drain_timeout = self.config.listener.drain_timeout();
        tracing::info!(
            address = %addr,
            relay_route = %self.config.relay.route,
            asset_root = %self.config.assets.root.display(),
            "HTTP server starting"
        );

        let (stopping_tx, mut stopping_rx) = watch::channel(false);
        let signal = async move {
            shutdown_signal(shutdown).await;
            let _ = stopping_tx.send(true);
        };
        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .into_future();

        let drain_deadline = async {
            if stopping_rx.wait_for(|stopping| *stopping).await.is_err() {
                std::future::pending::<()>().await;
            }
            tokio::time::sleep(drain_timeout).await;
        };

        tokio::select! {
            result = serve => result?,
            _ = drain_deadline => tracing::warn!(
                drain_timeout_secs = drain_timeout.as_secs(),
                "Drain deadline reached, abandoning in-flight requests"
            ),
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for the shutdown trigger.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    // A dropped coordinator can never fire; keep serving.
    if let Err(broadcast::error::RecvError::Closed) = shutdown.recv().await {
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown triggered, draining");
}
