//! Inbound relay payload decoding.
//!
//! # Responsibilities
//! - Decode the caller's JSON description of an outbound call
//! - Apply defaults (method, headers) and normalization (uppercase method)
//! - Reject a missing target before anything touches the network
//!
//! # Design Decisions
//! - Decoding is lenient: malformed JSON or a non-object payload behaves like `{}`
//! - Individual fields of the wrong type are treated as absent
//! - The only hard failure is a missing `targetUrl`

use serde_json::{Map, Value};
use url::Url;

use crate::relay::error::RelayError;
use crate::relay::headers::sanitize_outbound;

/// Method used when the caller does not name one.
pub const DEFAULT_METHOD: &str = "POST";

/// A validated description of one outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayRequest {
    /// Absolute target URL, as supplied.
    pub target_url: String,
    /// Uppercased method token.
    pub method: String,
    /// Caller headers with transport-owned headers removed.
    pub headers: Vec<(String, String)>,
    /// JSON body; `None` when absent or `null`.
    pub body: Option<Value>,
}

impl RelayRequest {
    /// Decode a raw inbound body.
    pub fn from_body(raw: &[u8]) -> Result<Self, RelayError> {
        let fields = match serde_json::from_slice::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Self::from_fields(fields)
    }

    /// Build from an already decoded JSON object.
    pub fn from_fields(mut fields: Map<String, Value>) -> Result<Self, RelayError> {
        let target_url = match fields.remove("targetUrl") {
            Some(Value::String(url)) if !url.is_empty() => url,
            _ => return Err(RelayError::MissingTarget),
        };

        let method = match fields.remove("method") {
            Some(Value::String(m)) if !m.is_empty() => m.to_uppercase(),
            _ => DEFAULT_METHOD.to_string(),
        };

        let headers = match fields.remove("headers") {
            Some(Value::Object(map)) => sanitize_outbound(header_pairs(map)),
            _ => Vec::new(),
        };

        let body = fields.remove("body").filter(|b| !b.is_null());

        Ok(Self {
            target_url,
            method,
            headers,
            body,
        })
    }

    /// Target rendered for logs: host and path, no userinfo or query.
    pub fn log_target(&self) -> String {
        match Url::parse(&self.target_url) {
            Ok(url) => format!("{}{}", url.host_str().unwrap_or_default(), url.path()),
            Err(_) => "<invalid url>".to_string(),
        }
    }

    /// Body to attach to the outbound call. `GET` never carries one.
    pub fn outbound_body(&self) -> Option<&Value> {
        if self.method == "GET" {
            None
        } else {
            self.body.as_ref()
        }
    }
}

fn header_pairs(map: Map<String, Value>) -> Vec<(String, String)> {
    map.into_iter()
        .filter_map(|(name, value)| match value {
            Value::String(s) => Some((name, s)),
            Value::Number(n) => Some((name, n.to_string())),
            Value::Bool(b) => Some((name, b.to_string())),
            _ => None,
        })
        .collect()
}
