use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{catalog, collection, creatures, handlers, search};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Catalog
        .route("/catalog", get(catalog::list_catalog))
        .route("/catalog/page", post(catalog::load_page))
        // Creature detail
        .route("/creatures/{name}", get(creatures::get_creature))
        // Search
        .route("/search", get(search::search))
        // Collection
        .route("/collection", get(collection::get_collection))
        .route("/collection/{name}/toggle", post(collection::toggle))
        .with_state(Arc::clone(&state));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics).with_state(state))
        .layer(middleware::from_fn(
            crate::api::middleware::metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}
