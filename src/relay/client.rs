//! Outbound side of the relay.
//!
//! # Responsibilities
//! - Own the reqwest client (built once, shared by every relay call)
//! - Turn a `RelayRequest` into exactly one outbound HTTP call
//! - Translate the upstream reply into a `RelayResponse`
//! - Fold every transport failure into `RelayError::Transport`
//!
//! # Design Decisions
//! - No retries: the caller sees the first outcome
//! - Upstream status codes are never interpreted, 4xx/5xx pass through
//! - The client has no decompression features, bodies are relayed byte for byte

use axum::body::Bytes;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use std::time::{Duration, Instant};
use url::Url;

use crate::relay::error::RelayError;
use crate::relay::headers::filter_response;
use crate::relay::request::RelayRequest;

/// Upstream reply as it will be re-emitted to the caller.
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: StatusCode,
    /// Upstream headers minus framing/connection headers.
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Performs relay calls.
#[derive(Debug, Clone)]
pub struct Relay {
    client: reqwest::Client,
}

impl Relay {
    /// Build a relay whose calls are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::transport(&e))?;
        Ok(Self { client })
    }

    /// Decode an inbound body and forward it, logging the outcome.
    ///
    /// Log events name the target by host and path only; query strings and
    /// userinfo regularly carry credentials.
    pub async fn handle(&self, raw: &[u8]) -> Result<RelayResponse, RelayError> {
        let start_time = Instant::now();
        let request = match RelayRequest::from_body(raw) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected relay request");
                return Err(e);
            }
        };

        let method = request.method.clone();
        let target = request.log_target();
        tracing::debug!(method = %method, target = %target, "Relaying request");

        let outcome = self.forward(request).await;
        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        match &outcome {
            Ok(upstream) => tracing::info!(
                method = %method,
                target = %target,
                status = upstream.status.as_u16(),
                bytes = upstream.body.len(),
                elapsed_ms,
                "Relay completed"
            ),
            Err(e) => tracing::error!(
                method = %method,
                target = %target,
                error = %e,
                elapsed_ms,
                "Relay failed"
            ),
        }
        outcome
    }

    /// Perform the outbound call described by `request`.
    pub async fn forward(&self, request: RelayRequest) -> Result<RelayResponse, RelayError> {
        let url = Url::parse(&request.target_url)
            .map_err(|e| RelayError::Transport(format!("invalid targetUrl: {}", e)))?;
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|e| RelayError::Transport(format!("invalid method `{}`: {}", request.method, e)))?;
        let headers = outbound_headers(&request.headers)?;

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = request.outbound_body() {
            // reqwest only sets content-type here when the caller did not.
            builder = builder.json(body);
        }

        // The URL is dropped from transport errors: they are logged and may
        // carry a key in the query string.
        let response = builder
            .send()
            .await
            .map_err(|e| RelayError::transport(&e.without_url()))?;
        let status = response.status();
        let headers = filter_response(response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|e| RelayError::transport(&e.without_url()))?;

        Ok(RelayResponse {
            status,
            headers,
            body,
        })
    }
}

fn outbound_headers(pairs: &[(String, String)]) -> Result<HeaderMap, RelayError> {
    let mut headers = HeaderMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| RelayError::Transport(format!("invalid header name `{}`: {}", name, e)))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| RelayError::Transport(format!("invalid value for header `{}`: {}", name, e)))?;
        headers.append(header_name, header_value);
    }
    Ok(headers)
}
