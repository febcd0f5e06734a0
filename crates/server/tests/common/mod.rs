//! Common test utilities for E2E testing with mocks.
//!
//! Builds an in-process server with a `MockCreatureSource` behind it so the
//! full HTTP surface can be exercised without a network.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use pokedex_core::testing::MockCreatureSource;
use pokedex_core::{CatalogLoader, Config, CreatureSource, NameIndex};

/// Re-export fixtures for test convenience
pub use pokedex_core::testing::fixtures;

/// Test fixture for E2E testing with a mock remote source.
///
/// Configure the source (pages, creatures, names) before calling `build`;
/// the name index is loaded once at construction, like at server startup.
///
/// # Example
///
/// ```rust,ignore
/// let source = Arc::new(MockCreatureSource::new());
/// source.push_page(fixtures::summary_page(&["pikachu"], None)).await;
/// let fixture = TestFixture::build(source, 20).await;
///
/// let response = fixture.post("/api/v1/catalog/page", Value::Null).await;
/// assert_eq!(response.status, StatusCode::OK);
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock source - inspect recorded calls
    pub source: Arc<MockCreatureSource>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture with an unconfigured mock source.
    pub async fn new() -> Self {
        Self::build(Arc::new(MockCreatureSource::new()), 20).await
    }

    /// Create a fixture around a pre-configured source.
    pub async fn build(source: Arc<MockCreatureSource>, page_size: u32) -> Self {
        let config = Config {
            catalog: pokedex_core::CatalogConfig {
                page_size,
                ..Default::default()
            },
            ..Default::default()
        };

        let loader = CatalogLoader::with_limits(
            Arc::clone(&source) as Arc<dyn CreatureSource>,
            config.catalog.page_size,
            config.catalog.detail_concurrency,
        );
        let name_index =
            NameIndex::load(source.as_ref(), config.pokeapi.name_index_limit).await;

        let state = Arc::new(pokedex_server::state::AppState::new(
            config,
            Arc::clone(&source) as Arc<dyn CreatureSource>,
            loader,
            name_index,
        ));

        let router = pokedex_server::api::create_router(state);

        Self { router, source }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request without a body.
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.request("POST", path, None).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
