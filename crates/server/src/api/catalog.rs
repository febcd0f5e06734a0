//! Catalog API handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use pokedex_core::{CatalogEntry, Cursor, PageLoad};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub entries: Vec<CatalogEntry>,
    pub total: usize,
    pub cursor: Cursor,
}

#[derive(Debug, Serialize)]
pub struct PageLoadResponse {
    #[serde(flatten)]
    pub outcome: PageLoad,
    pub total: usize,
    pub cursor: Cursor,
}

/// GET /api/v1/catalog
///
/// Snapshot of the accumulated entries, in append order.
pub async fn list_catalog(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    let entries = state.loader().entries().await;
    let cursor = state.loader().cursor().await;
    let total = entries.len();

    Json(CatalogResponse {
        entries,
        total,
        cursor,
    })
}

/// POST /api/v1/catalog/page
///
/// Trigger the next page load. The outcome is always reported as JSON; the
/// status code distinguishes the degraded cases so callers can retry or back
/// off without parsing the body.
pub async fn load_page(State(state): State<Arc<AppState>>) -> (StatusCode, Json<PageLoadResponse>) {
    let outcome = state.loader().load_next_page().await;

    let status = match outcome {
        PageLoad::Appended(_) | PageLoad::Exhausted => StatusCode::OK,
        PageLoad::AlreadyLoading => StatusCode::CONFLICT,
        PageLoad::Failed => StatusCode::BAD_GATEWAY,
    };

    let total = state.loader().len().await;
    let cursor = state.loader().cursor().await;

    (
        status,
        Json(PageLoadResponse {
            outcome,
            total,
            cursor,
        }),
    )
}
