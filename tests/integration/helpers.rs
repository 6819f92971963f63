//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use crudhub_api::{AppState, build_router};
use crudhub_core::config::{AppConfig, DatabaseProvider};
use crudhub_database::Repositories;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Repositories behind the router, for direct inspection
    pub repositories: Repositories,
}

/// Response captured from a test request
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed JSON body, `Value::Null` when empty or not JSON
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over empty in-memory repositories
    pub fn new() -> Self {
        let mut config = AppConfig::from_toml_str("").expect("Failed to build test config");
        config.database.provider = DatabaseProvider::Memory;

        let repositories = Repositories::in_memory();
        let state = AppState::new(config, repositories.clone());

        Self {
            router: build_router(state),
            repositories,
        }
    }

    /// Send a request through the router
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a request with a raw, possibly malformed, body
    pub async fn request_raw(&self, method: &str, path: &str, body: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a user through the API and return its id
    pub async fn create_user(&self, name: &str, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/users",
                Some(serde_json::json!({ "name": name, "email": email })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["id"]
            .as_str()
            .expect("user id in response")
            .to_string()
    }

    /// Create a category through the API and return its id
    pub async fn create_category(&self, name: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/categories",
                Some(serde_json::json!({ "name": name })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["id"]
            .as_str()
            .expect("category id in response")
            .to_string()
    }
}
