use std::sync::Arc;

use pokedex_core::{CatalogLoader, CaughtTracker, Config, CreatureSource, NameIndex};

/// Shared application state.
pub struct AppState {
    config: Config,
    source: Arc<dyn CreatureSource>,
    loader: CatalogLoader,
    name_index: NameIndex,
    tracker: CaughtTracker,
}

impl AppState {
    pub fn new(
        config: Config,
        source: Arc<dyn CreatureSource>,
        loader: CatalogLoader,
        name_index: NameIndex,
    ) -> Self {
        Self {
            config,
            source,
            loader,
            name_index,
            tracker: CaughtTracker::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &dyn CreatureSource {
        self.source.as_ref()
    }

    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    pub fn name_index(&self) -> &NameIndex {
        &self.name_index
    }

    pub fn tracker(&self) -> &CaughtTracker {
        &self.tracker
    }
}
