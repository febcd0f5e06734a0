//! Search and suggestion flow.
//!
//! Two independent paths feed the display list: an in-memory name index for
//! instant substring suggestions, and a direct remote lookup for exact-match
//! resolution of a submitted query. `display_list` derives what the UI shows
//! from the active query and the accumulated catalog.

mod name_index;
mod resolver;

pub use name_index::NameIndex;
pub use resolver::resolve_exact;

use crate::catalog::CatalogEntry;

/// Default cap on suggestion results.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Derive the displayed entry set (pure, no state of its own).
///
/// A non-blank query shows the exact-match result (zero or one entries);
/// otherwise the full accumulated catalog is shown.
pub fn display_list(
    query: &str,
    search_result: Option<&CatalogEntry>,
    catalog: &[CatalogEntry],
) -> Vec<CatalogEntry> {
    if query.trim().is_empty() {
        catalog.to_vec()
    } else {
        search_result.cloned().into_iter().collect()
    }
}
