//! Request identification.
//!
//! # Responsibilities
//! - Assign a UUID v4 `x-request-id` to every inbound request lacking one
//! - Echo the id on the response so the frontend can correlate logs
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - A caller-supplied id is kept as is

use axum::http::{HeaderMap, HeaderName};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer, MakeRequestUuid};

/// Header carrying the request id.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Layer assigning ids to inbound requests.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid)
}

/// Layer copying the id onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(X_REQUEST_ID)
}

/// Read the request id, or `"unknown"` outside the id layers.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}
