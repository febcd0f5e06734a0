//! Collection API handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use pokedex_core::{CaughtStatus, CollectionStats, Variant};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    /// Every creature with at least one caught flag set.
    pub caught: HashMap<String, CaughtStatus>,
    pub stats: CollectionStats,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub variant: Variant,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub name: String,
    pub status: CaughtStatus,
}

/// GET /api/v1/collection
pub async fn get_collection(State(state): State<Arc<AppState>>) -> Json<CollectionResponse> {
    let caught = state.tracker().all().await;
    let stats = state.tracker().stats().await;

    Json(CollectionResponse { caught, stats })
}

/// POST /api/v1/collection/{name}/toggle
///
/// Flip the caught flag for one variant and return the new status.
pub async fn toggle(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(body): Json<ToggleRequest>,
) -> Json<ToggleResponse> {
    let status = state.tracker().toggle(&name, body.variant).await;

    Json(ToggleResponse { name, status })
}
