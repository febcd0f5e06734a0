//! Ephemeral caught-status tracking.
//!
//! Purely in-memory by design: the upstream app never persisted this either,
//! so the whole collection is lost on restart.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Which variant of a creature was caught.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Normal,
    Shiny,
}

/// Caught flags for one creature.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaughtStatus {
    pub normal: bool,
    pub shiny: bool,
}

impl CaughtStatus {
    /// Whether either variant was caught.
    pub fn any(&self) -> bool {
        self.normal || self.shiny
    }
}

/// Aggregate counts over the collection (the checklist summary).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionStats {
    /// Creatures with the normal variant caught.
    pub normal: usize,
    /// Creatures with the shiny variant caught.
    pub shiny: usize,
    /// Sum of both counts (a creature caught in both variants counts twice).
    pub total: usize,
}

/// In-memory caught-status tracker.
#[derive(Debug, Default)]
pub struct CaughtTracker {
    caught: RwLock<HashMap<String, CaughtStatus>>,
}

impl CaughtTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the caught flag for one variant, returning the new status.
    ///
    /// Toggling twice restores the original value.
    pub async fn toggle(&self, name: &str, variant: Variant) -> CaughtStatus {
        let mut caught = self.caught.write().await;
        let status = caught.entry(name.to_string()).or_default();
        match variant {
            Variant::Normal => status.normal = !status.normal,
            Variant::Shiny => status.shiny = !status.shiny,
        }
        *status
    }

    /// Current status for a creature (all-false when never toggled).
    pub async fn get(&self, name: &str) -> CaughtStatus {
        self.caught
            .read()
            .await
            .get(name)
            .copied()
            .unwrap_or_default()
    }

    /// Snapshot of every creature with at least one caught flag set.
    pub async fn all(&self) -> HashMap<String, CaughtStatus> {
        self.caught
            .read()
            .await
            .iter()
            .filter(|(_, status)| status.any())
            .map(|(name, status)| (name.clone(), *status))
            .collect()
    }

    /// Aggregate checklist counts.
    pub async fn stats(&self) -> CollectionStats {
        let caught = self.caught.read().await;
        let normal = caught.values().filter(|s| s.normal).count();
        let shiny = caught.values().filter(|s| s.shiny).count();
        CollectionStats {
            normal,
            shiny,
            total: normal + shiny,
        }
    }
}
