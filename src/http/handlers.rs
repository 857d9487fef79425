//! Route handlers owned by the server: liveness and the relay endpoint.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::time::Instant;
use tracing::Instrument;

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Version reported by the liveness endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        message: "Local server is running",
        version: VERSION,
    })
}

/// `POST /api/proxy`.
///
/// Always produces a well-formed response: the upstream reply on success,
/// a JSON error object otherwise.
pub async fn relay(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let start_time = Instant::now();
    let span = tracing::info_span!("relay", request_id = %request_id(&headers));

    match state.relay.handle(&body).instrument(span).await {
        Ok(upstream) => {
            metrics::record_relay("upstream", upstream.status.as_u16(), start_time);

            let mut response = Response::new(Body::from(upstream.body));
            *response.status_mut() = upstream.status;
            *response.headers_mut() = upstream.headers;
            response
        }
        Err(e) => {
            metrics::record_relay(e.kind(), e.status().as_u16(), start_time);
            e.into_response()
        }
    }
}
