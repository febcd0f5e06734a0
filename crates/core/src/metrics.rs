//! Prometheus metrics for core components.
//!
//! Covers the catalog loader and the exact-match search path; HTTP-level
//! metrics live in the server crate.

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts};

/// Page-load triggers by outcome.
pub static PAGE_LOADS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("pokedex_page_loads_total", "Total page load triggers"),
        &["result"], // "appended", "already_loading", "exhausted", "failed"
    )
    .unwrap()
});

/// Catalog entries appended (post-dedup).
pub static ENTRIES_APPENDED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "pokedex_catalog_entries_appended_total",
        "Total catalog entries appended after deduplication",
    )
    .unwrap()
});

/// Exact-match lookups by result.
pub static EXACT_LOOKUPS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("pokedex_exact_lookups_total", "Total exact-match lookups"),
        &["result"], // "hit", "miss", "error"
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(PAGE_LOADS.clone()),
        Box::new(ENTRIES_APPENDED.clone()),
        Box::new(EXACT_LOOKUPS.clone()),
    ]
}
