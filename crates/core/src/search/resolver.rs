//! Exact-match resolution against the remote source.

use tracing::{debug, warn};

use crate::catalog::CatalogEntry;
use crate::metrics;
use crate::pokeapi::{CreatureSource, PokeApiError};

/// Resolve a submitted query to at most one catalog entry.
///
/// The query is trimmed and lowercased before the lookup (the source keys
/// names in lowercase). Not-found and transport errors both degrade to
/// `None`; nothing is surfaced to the caller.
pub async fn resolve_exact(source: &dyn CreatureSource, query: &str) -> Option<CatalogEntry> {
    let name = query.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }

    match source.get_creature(&name).await {
        Ok(creature) => {
            metrics::EXACT_LOOKUPS.with_label_values(&["hit"]).inc();
            Some(CatalogEntry::from(creature))
        }
        Err(PokeApiError::NotFound(_)) => {
            debug!(query = %name, "exact lookup found nothing");
            metrics::EXACT_LOOKUPS.with_label_values(&["miss"]).inc();
            None
        }
        Err(e) => {
            warn!(query = %name, error = %e, "exact lookup failed");
            metrics::EXACT_LOOKUPS.with_label_values(&["error"]).inc();
            None
        }
    }
}
