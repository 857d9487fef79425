//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): relay calls by outcome and status
//! - `relay_request_duration_seconds` (histogram): time spent per relay call
//!
//! Outcomes are `upstream` (any upstream reply), `validation` and `transport`.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must be called from within the tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), metrics_exporter_prometheus::BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one finished relay call.
pub fn record_relay(outcome: &'static str, status: u16, start: Instant) {
    counter!("relay_requests_total", "outcome" => outcome, "status" => status.to_string())
        .increment(1);
    histogram!("relay_request_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}
