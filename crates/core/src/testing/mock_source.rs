//! Mock remote source for testing.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::pokeapi::{Creature, CreatureSource, PokeApiError, SummaryPage};

/// Mock implementation of the `CreatureSource` trait.
///
/// Provides controllable behavior for testing:
/// - Scripted summary pages, consumed one per `list_page` call
/// - A detail payload map keyed by name (missing names yield `NotFound`)
/// - Recorded calls for assertions
/// - One-shot error injection and an optional response delay
///
/// # Example
///
/// ```rust,ignore
/// let source = MockCreatureSource::new();
/// source.push_page(fixtures::summary_page(&["pikachu"], None)).await;
/// source.insert_creature(fixtures::creature("pikachu", &["electric"])).await;
///
/// let loader = CatalogLoader::new(Arc::new(source));
/// assert_eq!(loader.load_next_page().await, PageLoad::Appended(1));
/// ```
#[derive(Debug, Default)]
pub struct MockCreatureSource {
    pages: RwLock<VecDeque<SummaryPage>>,
    creatures: RwLock<HashMap<String, Creature>>,
    names: RwLock<Vec<String>>,
    list_calls: RwLock<Vec<(u32, u32)>>,
    detail_calls: RwLock<Vec<String>>,
    name_list_calls: RwLock<u32>,
    next_error: RwLock<Option<PokeApiError>>,
    response_delay: RwLock<Option<Duration>>,
}

impl MockCreatureSource {
    /// Create a mock with no scripted pages or creatures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a summary page; pages are served in push order. When the queue
    /// runs dry, `list_page` serves an empty terminal page.
    pub async fn push_page(&self, page: SummaryPage) {
        self.pages.write().await.push_back(page);
    }

    /// Register a detail payload, keyed by the creature's name.
    pub async fn insert_creature(&self, creature: Creature) {
        self.creatures
            .write()
            .await
            .insert(creature.name.clone(), creature);
    }

    /// Set the names served by `list_names`.
    pub async fn set_names(&self, names: Vec<String>) {
        *self.names.write().await = names;
    }

    /// Configure the next call (of any kind) to fail with the given error.
    pub async fn set_next_error(&self, error: PokeApiError) {
        *self.next_error.write().await = Some(error);
    }

    /// Delay every response by the given duration.
    pub async fn set_response_delay(&self, delay: Duration) {
        *self.response_delay.write().await = Some(delay);
    }

    /// Recorded `(offset, limit)` pairs from `list_page` calls.
    pub async fn list_calls(&self) -> Vec<(u32, u32)> {
        self.list_calls.read().await.clone()
    }

    /// Recorded names from `get_creature` calls.
    pub async fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.read().await.clone()
    }

    /// Number of `list_names` calls.
    pub async fn name_list_calls(&self) -> u32 {
        *self.name_list_calls.read().await
    }

    async fn simulate_latency(&self) {
        let delay = *self.response_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    async fn take_error(&self) -> Option<PokeApiError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl CreatureSource for MockCreatureSource {
    async fn list_page(&self, offset: u32, limit: u32) -> Result<SummaryPage, PokeApiError> {
        self.simulate_latency().await;
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.list_calls.write().await.push((offset, limit));

        let page = self.pages.write().await.pop_front();
        Ok(page.unwrap_or(SummaryPage {
            refs: vec![],
            next: None,
        }))
    }

    async fn get_creature(&self, name_or_id: &str) -> Result<Creature, PokeApiError> {
        self.simulate_latency().await;
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.detail_calls.write().await.push(name_or_id.to_string());

        self.creatures
            .read()
            .await
            .get(name_or_id)
            .cloned()
            .ok_or_else(|| PokeApiError::NotFound(name_or_id.to_string()))
    }

    async fn list_names(&self, limit: u32) -> Result<Vec<String>, PokeApiError> {
        self.simulate_latency().await;
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        *self.name_list_calls.write().await += 1;

        let names = self.names.read().await;
        Ok(names.iter().take(limit as usize).cloned().collect())
    }
}
