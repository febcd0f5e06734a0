//! Flat name index for instant suggestion matching.

use tracing::warn;

use crate::pokeapi::CreatureSource;

/// Flat set of all known creature names, loaded once and read-only after.
///
/// Used only for suggestion matching; exact resolution always goes to the
/// remote source.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    names: Vec<String>,
}

impl NameIndex {
    /// Build an index from an already-fetched name list.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Fetch the full name list from the source.
    ///
    /// A failure degrades to an empty index (suggestions disabled) rather
    /// than failing startup.
    pub async fn load(source: &dyn CreatureSource, limit: u32) -> Self {
        match source.list_names(limit).await {
            Ok(names) => Self::new(names),
            Err(e) => {
                warn!(error = %e, "failed to load name index, suggestions disabled");
                Self::default()
            }
        }
    }

    /// Case-insensitive substring match against the index, in source order,
    /// capped at `limit`. A blank query yields nothing.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&query))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Number of indexed names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the index is empty (never loaded or load failed).
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
