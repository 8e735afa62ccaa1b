//! Metrics collection and exposition.
//!
//! # Metrics
//! - `reacto_calls_total` (counter): calls by name and outcome
//! - `reacto_call_duration_seconds` (histogram): end-to-end call latency
//! - `reacto_errors_captured_total` (counter): transport failures recorded

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one finished call.
pub fn record_call(call: &str, outcome: &'static str, start_time: Instant) {
    metrics::counter!("reacto_calls_total", "call" => call.to_string(), "outcome" => outcome).increment(1);
    metrics::histogram!("reacto_call_duration_seconds", "call" => call.to_string())
        .record(start_time.elapsed().as_secs_f64());
}

/// Record one captured transport failure.
pub fn record_error_captured() {
    metrics::counter!("reacto_errors_captured_total").increment(1);
}
