//! Prometheus metrics for the HTTP layer.
//!
//! The registry holds the request metrics defined here plus every collector
//! from `tubetag_core::metrics`, so a single scrape of `/metrics` covers
//! search, acquisition, tagging and HTTP traffic.

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// HTTP request duration in seconds.
///
/// Downloads run for minutes, so the buckets reach further than a typical API.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "tubetag_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 180.0, 600.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("tubetag_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "tubetag_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    for metric in tubetag_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all registered metrics in the Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Map a request path to a bounded label value.
///
/// Routed paths are kept as-is. Anything else collapses to `/other` so that
/// scanners probing random URLs cannot blow up label cardinality.
pub fn normalize_path(path: &str) -> &'static str {
    match path.trim_end_matches('/') {
        "/health" => "/health",
        "/config" => "/config",
        "/metrics" => "/metrics",
        "/search" => "/search",
        "/download" => "/download",
        _ => "/other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_known_routes() {
        assert_eq!(normalize_path("/search"), "/search");
        assert_eq!(normalize_path("/download"), "/download");
        assert_eq!(normalize_path("/health/"), "/health");
    }

    #[test]
    fn test_normalize_path_unknown_collapses() {
        assert_eq!(normalize_path("/wp-admin/setup.php"), "/other");
        assert_eq!(normalize_path("/"), "/other");
    }

    #[test]
    fn test_encode_metrics_returns_prometheus_format() {
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/health", "200"])
            .inc();

        let output = encode_metrics();
        assert!(output.contains("tubetag_http_requests_total"));
        assert!(output.contains("# TYPE"));
    }

    #[test]
    fn test_registry_contains_core_metrics() {
        tubetag_core::metrics::FINALIZE_FALLBACKS.inc_by(0);
        tubetag_core::metrics::SEARCHES_TOTAL
            .with_label_values(&["success"])
            .inc_by(0);

        let output = encode_metrics();
        assert!(output.contains("tubetag_finalize_fallbacks_total"));
        assert!(output.contains("tubetag_searches_total"));
    }
}
