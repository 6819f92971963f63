//! Integration tests for the health endpoint and routing fallbacks.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health_reports_provider() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["provider"], "memory");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
    assert!(response.body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/widgets", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unsupported_method() {
    let app = helpers::TestApp::new();

    let response = app.request("PATCH", "/api/users", None).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
