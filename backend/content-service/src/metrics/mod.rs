//! Prometheus metrics for content-service.
//!
//! Exposes operation/request collectors and an HTTP handler for the
//! `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    /// Service operations segmented by operation name and outcome.
    pub static ref CONTENT_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "content_operations_total",
        "Content service operations segmented by operation and outcome",
        &["operation", "outcome"]
    )
    .expect("failed to register content_operations_total");

    /// HTTP request latency by method and response status.
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration segmented by method and status",
        &["method", "status"]
    )
    .expect("failed to register http_request_duration_seconds");
}

/// Count one service operation. `outcome` is `ok` or an error kind.
pub fn record_operation(operation: &str, outcome: &str) {
    CONTENT_OPERATIONS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
