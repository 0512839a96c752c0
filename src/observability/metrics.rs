//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): requests by method, status, outcome
//! - `relay_request_duration_seconds` (histogram): latency by method
//!
//! # Design Decisions
//! - Recording happens in the handlers; the library writes into whatever
//!   recorder the process installed and is a no-op without one
//! - The `outcome` label distinguishes passthrough, preflight, synthesized
//!   errors and router fallbacks without parsing status codes

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Failure to install is logged, not fatal; the relay keeps serving without
/// metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(error) => tracing::error!(%error, "Failed to install metrics exporter"),
    }
}

/// Record one finished request.
pub fn record_request(method: &str, status: u16, outcome: &str, start_time: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
        ("outcome", outcome.to_string()),
    ];
    counter!("relay_requests_total", &labels).increment(1);
    histogram!("relay_request_duration_seconds", "method" => method.to_string())
        .record(start_time.elapsed().as_secs_f64());
}
