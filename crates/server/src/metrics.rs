//! Prometheus metrics for observability.
//!
//! HTTP request metrics live here; catalog, name-index and collection gauges
//! are collected dynamically from the application state before each scrape.
//! Core counters (page loads, exact lookups) are registered alongside.

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
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "pokedex_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("pokedex_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "pokedex_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

/// Accumulated catalog entries (collected dynamically).
pub static CATALOG_ENTRIES: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "pokedex_catalog_entries",
        "Number of accumulated catalog entries",
    )
    .unwrap()
});

/// Names held by the suggestion index (collected dynamically).
pub static NAME_INDEX_SIZE: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "pokedex_name_index_size",
        "Number of names in the suggestion index",
    )
    .unwrap()
});

/// Caught flags currently set across the collection (collected dynamically).
pub static COLLECTION_CAUGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "pokedex_collection_caught",
        "Caught flags currently set (normal and shiny counted separately)",
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
    registry
        .register(Box::new(CATALOG_ENTRIES.clone()))
        .unwrap();
    registry
        .register(Box::new(NAME_INDEX_SIZE.clone()))
        .unwrap();
    registry
        .register(Box::new(COLLECTION_CAUGHT.clone()))
        .unwrap();

    // Core metrics (page loads, entries appended, exact lookups)
    for metric in pokedex_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Update gauges from current application state before a scrape.
pub async fn collect_dynamic_metrics(state: &crate::state::AppState) {
    CATALOG_ENTRIES.set(state.loader().len().await as i64);
    NAME_INDEX_SIZE.set(state.name_index().len() as i64);
    COLLECTION_CAUGHT.set(state.tracker().stats().await.total as i64);
}

/// Normalize a path for metric labels (creature names become a placeholder).
pub fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let mut mask_next = false;
    for segment in path.split('/') {
        if mask_next && !segment.is_empty() {
            segments.push("{name}");
        } else {
            segments.push(segment);
        }
        mask_next = matches!(segment, "creatures" | "collection");
    }
    segments.join("/")
}
