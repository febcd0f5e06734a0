//! Search API handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use pokedex_core::{display_list, resolve_exact, CatalogEntry};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    /// Name-index matches, capped at the configured suggestion limit.
    pub suggestions: Vec<String>,
    /// Exact-match result (zero or one entry); with a blank query this is
    /// the accumulated catalog instead.
    pub results: Vec<CatalogEntry>,
}

/// GET /api/v1/search?q=
///
/// A miss is not an error: the response is 200 with empty results.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let limit = state.config().catalog.suggestion_limit;
    let suggestions = state.name_index().suggest(&params.q, limit);

    let resolved = resolve_exact(state.source(), &params.q).await;
    let catalog = state.loader().entries().await;
    let results = display_list(&params.q, resolved.as_ref(), &catalog);

    Json(SearchResponse {
        query: params.q,
        suggestions,
        results,
    })
}
