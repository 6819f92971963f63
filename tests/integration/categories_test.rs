//! Integration tests for the categories resource.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_index_sorted_by_name() {
    let app = helpers::TestApp::new();
    for name in ["Travel", "Books", "Music"] {
        app.create_category(name).await;
    }

    let response = app.request("GET", "/api/categories", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<_> = response.body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Books", "Music", "Travel"]);
}

#[tokio::test]
async fn test_create_returns_form_schema() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/categories/create", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["resource"], "categories");
    assert_eq!(response.body["fields"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_store_derives_slug() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(json!({ "name": "Home & Garden", "description": "Outdoor things" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["slug"], "home-garden");
    assert_eq!(response.body["description"], "Outdoor things");
}

#[tokio::test]
async fn test_store_duplicate_slug_conflicts() {
    let app = helpers::TestApp::new();
    app.create_category("Books").await;

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(json!({ "name": "Other", "slug": "BOOKS" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_store_missing_name_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/categories", Some(json!({ "slug": "books" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_store_rejects_overlong_fields() {
    let app = helpers::TestApp::new();
    let long = "x".repeat(256);

    for body in [
        json!({ "name": long.clone() }),
        json!({ "name": "Books", "slug": long.clone() }),
        json!({ "name": "   " }),
    ] {
        let response = app
            .request("POST", "/api/categories", Some(body.clone()))
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR", "{body}");
    }

    let listing = app.request("GET", "/api/categories", None).await;
    assert_eq!(listing.body["total_items"], 0);
}

#[tokio::test]
async fn test_edit_then_update() {
    let app = helpers::TestApp::new();
    let id = app.create_category("Books").await;

    let edit = app
        .request("GET", &format!("/api/categories/{id}/edit"), None)
        .await;
    assert_eq!(edit.status, StatusCode::OK);
    assert_eq!(edit.body["record"]["slug"], "books");

    let update = app
        .request(
            "PUT",
            &format!("/api/categories/{id}"),
            Some(json!({ "name": "Books & Comics" })),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);
    assert_eq!(update.body["name"], "Books & Comics");
    assert_eq!(update.body["slug"], "books");

    let show = app
        .request("GET", &format!("/api/categories/{id}"), None)
        .await;
    assert_eq!(show.body["name"], "Books & Comics");
}

#[tokio::test]
async fn test_update_to_taken_slug_conflicts() {
    let app = helpers::TestApp::new();
    app.create_category("Books").await;
    let music = app.create_category("Music").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/categories/{music}"),
            Some(json!({ "slug": "books" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_category() {
    let app = helpers::TestApp::new();
    let id = app.create_category("Books").await;

    let response = app
        .request("DELETE", &format!("/api/categories/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let index = app.request("GET", "/api/categories", None).await;
    assert_eq!(index.body["total_items"], 0);
}

#[tokio::test]
async fn test_malformed_id_is_validation_error() {
    let app = helpers::TestApp::new();

    let response = app
        .request("DELETE", "/api/categories/12345", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
