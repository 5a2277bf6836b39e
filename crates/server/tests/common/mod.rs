//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process router
//! with a mock provider and tagger injected, and a real storage manager
//! writing into a temp dir.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use tubetag_core::{
    testing::{MockMediaProvider, MockTagger},
    AcquisitionConfig, AcquisitionPipeline, Config, FileLifecycleManager, SearchOrchestrator,
    StorageConfig,
};
use tubetag_server::state::AppState;

/// Re-export fixtures for test convenience
pub use tubetag_core::testing::fixtures;

/// Test fixture for E2E testing with mock dependencies.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::new();
///     fixture.provider.set_search_results(fixtures::raw_entries(3)).await;
///
///     let response = fixture.post("/search", json!({"query": "lofi"})).await;
///     assert_eq!(response.status, StatusCode::OK);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock provider - configure search results and downloads
    pub provider: Arc<MockMediaProvider>,
    /// Mock tagger - records tagged paths
    pub tagger: Arc<MockTagger>,
    /// Shared state, for reaching the shutdown token
    pub state: Arc<AppState>,
    /// Directory the pipeline writes into
    pub output_dir: PathBuf,
    _temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub bytes: Bytes,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestFixture {
    /// Create a new test fixture with default mocks.
    pub fn new() -> Self {
        Self::with_acquisition(AcquisitionConfig::default())
    }

    /// Create a test fixture with custom acquisition settings.
    pub fn with_acquisition(acquisition: AcquisitionConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_dir = temp_dir.path().join("downloads");

        let mut config = Config::default();
        config.storage = StorageConfig::with_output_dir(&output_dir);
        config.acquisition = acquisition.clone();

        let provider = Arc::new(MockMediaProvider::new());
        let tagger = Arc::new(MockTagger::new());

        let search = SearchOrchestrator::new(provider.clone(), config.search.clone());
        let pipeline = AcquisitionPipeline::new(
            provider.clone(),
            tagger.clone(),
            FileLifecycleManager::new(config.storage.clone()),
            acquisition,
        );

        let state = Arc::new(AppState::new(config, search, pipeline));
        let router = tubetag_server::api::create_router(Arc::clone(&state));

        Self {
            router,
            provider,
            tagger,
            state,
            output_dir,
            _temp_dir: temp_dir,
        }
    }

    /// File names currently in the output directory, sorted.
    pub fn files(&self) -> Vec<String> {
        list_files(&self.output_dir)
    }

    /// Send a GET request to the test router.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.post_raw(path, &serde_json::to_string(&body).unwrap())
            .await
    }

    /// Send a POST request with a raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
            bytes,
        }
    }
}

fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
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
