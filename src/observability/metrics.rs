//! Metrics collection.
//!
//! # Responsibilities
//! - Define resolver metrics (attempts, server errors, exhaustion, stream fetches)
//! - Record through the `metrics` facade; the host application decides the exporter
//!
//! # Metrics
//! - `media_resolve_attempts_total` (counter): requests sent, by endpoint
//! - `media_resolve_server_errors_total` (counter): 5xx answers, by endpoint and status
//! - `media_resolve_exhausted_total` (counter): resolutions that ran out of endpoints
//! - `media_stream_fetches_total` (counter): stream downloads, by outcome
//!
//! # Design Decisions
//! - Without an installed recorder every call is a no-op
//! - Endpoint labels use the host only, never the full URL

use std::sync::atomic::{AtomicBool, Ordering};

use url::Url;

static ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn recording on or off process-wide.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

fn enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

fn endpoint_label(endpoint: &Url) -> String {
    endpoint.host_str().unwrap_or("unknown").to_string()
}

/// One request sent to `endpoint`.
pub fn record_attempt(endpoint: &Url) {
    if !enabled() {
        return;
    }
    metrics::counter!("media_resolve_attempts_total", "endpoint" => endpoint_label(endpoint)).increment(1);
}

/// `endpoint` answered with a retryable server error.
pub fn record_server_error(endpoint: &Url, status: u16) {
    if !enabled() {
        return;
    }
    metrics::counter!(
        "media_resolve_server_errors_total",
        "endpoint" => endpoint_label(endpoint),
        "status" => status.to_string()
    )
    .increment(1);
}

/// A resolution gave up after every endpoint failed.
pub fn record_exhausted() {
    if !enabled() {
        return;
    }
    metrics::counter!("media_resolve_exhausted_total").increment(1);
}

/// A stream fetch finished with `outcome` ("success" or "error").
pub fn record_stream_fetch(outcome: &'static str) {
    if !enabled() {
        return;
    }
    metrics::counter!("media_stream_fetches_total", "outcome" => outcome).increment(1);
}
