//! Relay error taxonomy and its HTTP rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// The two failure classes a relay call can end in.
#[derive(Debug, Error)]
pub enum RelayError {
    /// No usable `targetUrl`; nothing was sent upstream.
    #[error("targetUrl is required")]
    MissingTarget,

    /// The outbound call failed before a complete response was read.
    #[error("{0}")]
    Transport(String),
}

impl RelayError {
    /// Build a transport error from any error, keeping its source chain.
    ///
    /// reqwest's top-level message ("error sending request for url ...") hides
    /// the useful part (timeout, refused, dns) in its sources.
    pub fn transport(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        RelayError::Transport(message)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingTarget => StatusCode::BAD_REQUEST,
            RelayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::MissingTarget => "validation",
            RelayError::Transport(_) => "transport",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("outer failure")]
    struct Outer(#[source] std::io::Error);

    #[test]
    fn test_transport_message_includes_sources() {
        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        let relay = RelayError::transport(&err);
        assert_eq!(relay.to_string(), "outer failure: connection refused");
        assert_eq!(relay.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_missing_target_renders_400_json() {
        let response = RelayError::MissingTarget.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "error": "targetUrl is required" }));
    }
}
