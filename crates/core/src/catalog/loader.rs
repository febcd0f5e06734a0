//! Incremental page loader for the creature catalog.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::metrics;
use crate::pokeapi::{Creature, CreatureSource, PokeApiError};

use super::types::{CatalogEntry, Cursor, PageLoad};

/// Default number of summary refs per page (mirrors the list UI batch size).
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default bound on concurrent per-entry detail fetches.
pub const DEFAULT_DETAIL_CONCURRENCY: usize = 8;

#[derive(Debug, Default)]
struct CatalogState {
    entries: Vec<CatalogEntry>,
    names: HashSet<String>,
    cursor: Cursor,
}

/// Incremental catalog loader.
///
/// Accumulates deduplicated entries from the paginated list endpoint.
/// `load_next_page` never returns an error: remote failures are logged and
/// reported as `PageLoad::Failed`, leaving the accumulated state untouched
/// so the same page is retried wholesale on the next trigger.
pub struct CatalogLoader {
    source: Arc<dyn CreatureSource>,
    page_size: u32,
    detail_concurrency: usize,
    busy: AtomicBool,
    state: RwLock<CatalogState>,
}

impl CatalogLoader {
    /// Create a loader with default page size and concurrency bound.
    pub fn new(source: Arc<dyn CreatureSource>) -> Self {
        Self::with_limits(source, DEFAULT_PAGE_SIZE, DEFAULT_DETAIL_CONCURRENCY)
    }

    /// Create a loader with explicit page size and detail-fetch bound.
    pub fn with_limits(
        source: Arc<dyn CreatureSource>,
        page_size: u32,
        detail_concurrency: usize,
    ) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            detail_concurrency: detail_concurrency.max(1),
            busy: AtomicBool::new(false),
            state: RwLock::new(CatalogState::default()),
        }
    }

    /// Trigger the next page load.
    ///
    /// At most one load runs at a time; a trigger arriving while another is
    /// in flight returns `AlreadyLoading` without touching the source. Once
    /// the source reports exhaustion no further remote calls are made.
    pub async fn load_next_page(&self) -> PageLoad {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("page load already in flight, ignoring trigger");
            return PageLoad::AlreadyLoading;
        }
        // Must be released even if the caller drops us mid-load (e.g. the
        // HTTP request that triggered the load is aborted).
        let _guard = BusyGuard { busy: &self.busy };

        let outcome = self.fetch_page().await;
        metrics::PAGE_LOADS
            .with_label_values(&[outcome_label(outcome)])
            .inc();
        outcome
    }

    async fn fetch_page(&self) -> PageLoad {
        let offset = {
            let state = self.state.read().await;
            if !state.cursor.has_more {
                return PageLoad::Exhausted;
            }
            state.cursor.offset
        };

        let page = match self.source.list_page(offset, self.page_size).await {
            Ok(page) => page,
            Err(e) => {
                warn!(offset, error = %e, "page list fetch failed");
                return PageLoad::Failed;
            }
        };

        if page.refs.is_empty() {
            info!(offset, "source reported empty batch, catalog exhausted");
            let mut state = self.state.write().await;
            state.cursor.has_more = false;
            return PageLoad::Exhausted;
        }

        let last_page = page.is_last();

        // Resolve every ref's detail concurrently (bounded), preserving
        // source order. One failure discards the whole page.
        let creatures: Result<Vec<Creature>, PokeApiError> =
            stream::iter(page.refs.into_iter().map(|r| {
                let source = Arc::clone(&self.source);
                async move { source.get_creature(&r.name).await }
            }))
            .buffered(self.detail_concurrency)
            .try_collect()
            .await;

        let creatures = match creatures {
            Ok(creatures) => creatures,
            Err(e) => {
                warn!(offset, error = %e, "detail fetch failed, discarding page");
                return PageLoad::Failed;
            }
        };

        let mut state = self.state.write().await;
        let mut appended = 0;
        for creature in creatures {
            if state.names.contains(&creature.name) {
                continue;
            }
            state.names.insert(creature.name.clone());
            state.entries.push(CatalogEntry::from(creature));
            appended += 1;
        }
        state.cursor.offset = offset + self.page_size;
        if last_page {
            info!(total = state.entries.len(), "source reported last page");
            state.cursor.has_more = false;
        }

        metrics::ENTRIES_APPENDED.inc_by(appended as u64);
        debug!(
            offset,
            appended,
            total = state.entries.len(),
            "page appended"
        );
        PageLoad::Appended(appended)
    }

    /// Snapshot of the accumulated entries, in append order.
    pub async fn entries(&self) -> Vec<CatalogEntry> {
        self.state.read().await.entries.clone()
    }

    /// Current pagination cursor.
    pub async fn cursor(&self) -> Cursor {
        self.state.read().await.cursor
    }

    /// Number of accumulated entries.
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    /// Whether nothing has been accumulated yet.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }
}

struct BusyGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

fn outcome_label(outcome: PageLoad) -> &'static str {
    match outcome {
        PageLoad::Appended(_) => "appended",
        PageLoad::AlreadyLoading => "already_loading",
        PageLoad::Exhausted => "exhausted",
        PageLoad::Failed => "failed",
    }
}
