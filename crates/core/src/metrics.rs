//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Search (requests, result counts)
//! - Acquisition (jobs, durations, finalize fallbacks, cleanup failures)
//! - Provider subprocess timings
//! - Tagging outcomes

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Search
// =============================================================================

/// Search requests total by result.
pub static SEARCHES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("tubetag_searches_total", "Total search requests"),
        &["result"], // "success", "validation_error", "provider_error"
    )
    .unwrap()
});

/// Results returned per successful search.
pub static SEARCH_RESULTS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "tubetag_search_results",
            "Number of results returned per search",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 20.0, 50.0]),
    )
    .unwrap()
});

// =============================================================================
// Acquisition
// =============================================================================

/// Acquisition jobs total by result.
pub static ACQUISITIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("tubetag_acquisitions_total", "Total acquisition jobs"),
        &["result"], // "success", "validation_error", "storage_error", "provider_error", "delivery_error"
    )
    .unwrap()
});

/// Acquisition duration in seconds.
pub static ACQUISITION_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "tubetag_acquisition_duration_seconds",
            "Duration of a full acquisition job",
        )
        .buckets(vec![1.0, 5.0, 10.0, 30.0, 60.0, 120.0, 300.0, 600.0, 900.0]),
        &["result"],
    )
    .unwrap()
});

/// Renames that fell back to the working path.
pub static FINALIZE_FALLBACKS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "tubetag_finalize_fallbacks_total",
        "Total finalize steps that served the working path instead of the final name",
    )
    .unwrap()
});

/// Paths that could not be removed during cleanup.
pub static CLEANUP_FAILURES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "tubetag_cleanup_failures_total",
        "Total intermediate files that could not be removed",
    )
    .unwrap()
});

// =============================================================================
// Provider
// =============================================================================

/// Provider subprocess duration in seconds.
pub static PROVIDER_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "tubetag_provider_duration_seconds",
            "Duration of provider subprocess calls",
        )
        .buckets(vec![0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 300.0, 900.0]),
        &["operation"], // "search", "download"
    )
    .unwrap()
});

// =============================================================================
// Tagging
// =============================================================================

/// Tagging attempts total by result.
pub static TAGGING_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("tubetag_tagging_total", "Total tagging attempts"),
        &["result"], // "tagged", "tagged_without_cover", "failed", "disabled"
    )
    .unwrap()
});

/// Returns all core metrics for registration with a Prometheus registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(SEARCHES_TOTAL.clone()),
        Box::new(SEARCH_RESULTS.clone()),
        Box::new(ACQUISITIONS_TOTAL.clone()),
        Box::new(ACQUISITION_DURATION.clone()),
        Box::new(FINALIZE_FALLBACKS.clone()),
        Box::new(CLEANUP_FAILURES.clone()),
        Box::new(PROVIDER_DURATION.clone()),
        Box::new(TAGGING_TOTAL.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_metrics_register() {
        let registry = prometheus::Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }

        SEARCHES_TOTAL.with_label_values(&["success"]).inc();
        let families = registry.gather();
        assert!(families
            .iter()
            .any(|f| f.get_name() == "tubetag_searches_total"));
    }
}
