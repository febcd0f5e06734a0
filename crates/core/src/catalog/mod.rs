//! Accumulated creature catalog with incremental page loading.
//!
//! The catalog is an append-only, deduplicated, in-memory list fed by the
//! paginated list endpoint. `CatalogLoader::load_next_page` is the single
//! entry point the scroll trigger calls; duplicate triggers are absorbed by
//! a busy flag and an exhaustion latch rather than debounce or cancellation.

mod loader;
mod types;

pub use loader::{CatalogLoader, DEFAULT_DETAIL_CONCURRENCY, DEFAULT_PAGE_SIZE};
pub use types::*;
