//! Creature detail API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use pokedex_core::{Creature, PokeApiError};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /api/v1/creatures/{name}
///
/// Fetch the full detail for one creature straight from the remote source.
pub async fn get_creature(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Creature>, impl IntoResponse> {
    match state.source().get_creature(&name).await {
        Ok(creature) => Ok(Json(creature)),
        Err(PokeApiError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Creature not found: {}", name),
            }),
        )),
        Err(e) => Err((
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
