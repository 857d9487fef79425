//! Header sanitization for both directions of a relay call.
//!
//! # Design Decisions
//! - Matching is case-insensitive; `HeaderName` is always lowercase, caller
//!   supplied names are compared with `eq_ignore_ascii_case`
//! - Everything not named here passes through untouched, repeated values included
//! - Both filters are idempotent

use axum::http::{header, HeaderMap, HeaderName};

/// Headers the outbound transport computes itself.
pub const OUTBOUND_STRIPPED: [HeaderName; 2] = [header::HOST, header::CONTENT_LENGTH];

/// Upstream framing/connection headers that must not be re-emitted.
pub const RESPONSE_STRIPPED: [HeaderName; 3] = [
    header::CONTENT_ENCODING,
    header::TRANSFER_ENCODING,
    header::CONNECTION,
];

fn is_outbound_stripped(name: &str) -> bool {
    OUTBOUND_STRIPPED
        .iter()
        .any(|h| h.as_str().eq_ignore_ascii_case(name))
}

/// Drop `host` and `content-length` (any casing) from caller supplied headers.
pub fn sanitize_outbound(headers: Vec<(String, String)>) -> Vec<(String, String)> {
    headers
        .into_iter()
        .filter(|(name, _)| !is_outbound_stripped(name))
        .collect()
}

/// Copy an upstream header map minus the framing headers.
pub fn filter_response(upstream: &HeaderMap) -> HeaderMap {
    let mut filtered = HeaderMap::with_capacity(upstream.len());
    for (name, value) in upstream {
        if RESPONSE_STRIPPED.contains(name) {
            continue;
        }
        filtered.append(name.clone(), value.clone());
    }
    filtered
}
