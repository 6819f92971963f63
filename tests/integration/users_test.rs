//! Integration tests for the users resource.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_index_empty() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/users", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["items"], json!([]));
    assert_eq!(response.body["total_items"], 0);
    assert_eq!(response.body["total_pages"], 1);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["page_size"], 25);
}

#[tokio::test]
async fn test_index_returns_page_without_envelope() {
    let app = helpers::TestApp::new();
    app.create_user("Ada", "ada@example.com").await;
    app.create_user("Grace", "grace@example.com").await;
    app.create_user("Linus", "linus@example.com").await;

    let response = app
        .request("GET", "/api/users?page=1&per_page=2", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("success").is_none());
    assert_eq!(response.body["items"].as_array().unwrap().len(), 2);
    assert_eq!(response.body["total_items"], 3);
    assert_eq!(response.body["total_pages"], 2);
    assert_eq!(response.body["has_next"], true);
    assert_eq!(response.body["has_previous"], false);
}

#[tokio::test]
async fn test_index_clamps_page_size() {
    let app = helpers::TestApp::new();
    app.create_user("Ada", "ada@example.com").await;
    app.create_user("Grace", "grace@example.com").await;

    let smallest = app.request("GET", "/api/users?per_page=0", None).await;
    assert_eq!(smallest.status, StatusCode::OK);
    assert_eq!(smallest.body["page_size"], 1);
    assert_eq!(smallest.body["items"].as_array().unwrap().len(), 1);
    assert_eq!(smallest.body["total_pages"], 2);

    let largest = app.request("GET", "/api/users?per_page=1000", None).await;
    assert_eq!(largest.status, StatusCode::OK);
    assert_eq!(largest.body["page_size"], 100);
    assert_eq!(largest.body["items"].as_array().unwrap().len(), 2);

    let first = app.request("GET", "/api/users?page=0", None).await;
    assert_eq!(first.body["page"], 1);
}

#[tokio::test]
async fn test_index_huge_page_is_empty() {
    let app = helpers::TestApp::new();
    app.create_user("Ada", "ada@example.com").await;

    let response = app
        .request(
            "GET",
            "/api/users?page=18446744073709551615&per_page=100",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["items"], json!([]));
    assert_eq!(response.body["total_items"], 1);
    assert_eq!(response.body["has_next"], false);
    assert_eq!(response.body["has_previous"], true);
}

#[tokio::test]
async fn test_index_rejects_non_numeric_page() {
    let app = helpers::TestApp::new();

    for query in ["page=abc", "per_page=-1", "page=18446744073709551616"] {
        let response = app
            .request("GET", &format!("/api/users?{query}"), None)
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{query}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR", "{query}");
    }
}

#[tokio::test]
async fn test_create_returns_form_schema() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/users/create", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["resource"], "users");
    let names: Vec<_> = response.body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["name", "email"]);
}

#[tokio::test]
async fn test_store_creates_user() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "name": "  Ada Lovelace ", "email": "Ada@Example.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "Ada Lovelace");
    assert_eq!(response.body["email"], "ada@example.com");
    assert!(response.body["id"].is_string());
    assert!(response.body["created_at"].is_string());
}

#[tokio::test]
async fn test_store_duplicate_email_conflicts() {
    let app = helpers::TestApp::new();
    app.create_user("Ada", "ada@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "name": "Imposter", "email": "ada@example.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_store_rejects_blank_name() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "name": "   ", "email": "ada@example.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_store_rejects_overlong_name() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "name": "a".repeat(300), "email": "ada@example.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].as_str().unwrap().contains("name"));

    let listing = app.request("GET", "/api/users", None).await;
    assert_eq!(listing.body["total_items"], 0);
}

#[tokio::test]
async fn test_store_rejects_malformed_email() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({ "name": "Ada", "email": "not-an-email" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_store_rejects_malformed_body() {
    let app = helpers::TestApp::new();

    let response = app.request_raw("POST", "/api/users", "{not json").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_show_and_edit() {
    let app = helpers::TestApp::new();
    let id = app.create_user("Ada", "ada@example.com").await;

    let show = app.request("GET", &format!("/api/users/{id}"), None).await;
    assert_eq!(show.status, StatusCode::OK);
    assert_eq!(show.body["id"], id.as_str());
    assert_eq!(show.body["name"], "Ada");

    let edit = app
        .request("GET", &format!("/api/users/{id}/edit"), None)
        .await;
    assert_eq!(edit.status, StatusCode::OK);
    assert_eq!(edit.body["form"]["resource"], "users");
    assert_eq!(edit.body["record"], show.body);
}

#[tokio::test]
async fn test_show_missing_user() {
    let app = helpers::TestApp::new();
    let id = uuid::Uuid::new_v4();

    let response = app.request("GET", &format!("/api/users/{id}"), None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_id_is_validation_error() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/users/not-a-uuid", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let app = helpers::TestApp::new();
    let id = app.create_user("Ada", "ada@example.com").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{id}"),
            Some(json!({ "name": "Ada King" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Ada King");
    assert_eq!(response.body["email"], "ada@example.com");
}

#[tokio::test]
async fn test_update_rejects_malformed_email() {
    let app = helpers::TestApp::new();
    let id = app.create_user("Ada", "ada@example.com").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{id}"),
            Some(json!({ "email": "ada-at-example" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let show = app.request("GET", &format!("/api/users/{id}"), None).await;
    assert_eq!(show.body["email"], "ada@example.com");
}

#[tokio::test]
async fn test_update_missing_user() {
    let app = helpers::TestApp::new();
    let id = uuid::Uuid::new_v4();

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{id}"),
            Some(json!({ "name": "Nobody" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let app = helpers::TestApp::new();
    let id = app.create_user("Ada", "ada@example.com").await;

    let response = app
        .request("DELETE", &format!("/api/users/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["message"].as_str().unwrap().contains(&id));

    let again = app
        .request("DELETE", &format!("/api/users/{id}"), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let show = app.request("GET", &format!("/api/users/{id}"), None).await;
    assert_eq!(show.status, StatusCode::NOT_FOUND);
}
