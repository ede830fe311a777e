//! Service surface tests: health probe, OpenAPI document, docs page.
//!
//! Run with: `cargo test -p cookbook-api --test health_test`

mod helpers;

use helpers::setup_test_app;

use serde_json::{json, Value};

#[tokio::test]
async fn test_health_check_returns_static_status() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;
    assert_eq!(response.status_code(), 200);
    let body = response.json::<Value>();
    assert_eq!(body, json!({ "status": "API is running" }));
}

#[tokio::test]
async fn test_openapi_document_lists_recipe_paths() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;
    assert_eq!(response.status_code(), 200);
    let doc = response.json::<Value>();
    assert_eq!(doc["info"]["title"], "Cookbook API");

    let paths = doc["paths"].as_object().expect("paths object");
    assert!(paths.contains_key("/api/recipes"));
    assert!(paths.contains_key("/api/recipes/{id}"));
    assert!(paths.contains_key("/api/recipes/{recipeId}/ingredients"));
    assert!(paths.contains_key("/api/steps/{id}"));
}

#[tokio::test]
async fn test_docs_page_is_served() {
    let app = setup_test_app().await;

    let response = app.client().get("/docs").await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("rapi-doc"));
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/nonexistent").await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_wildcard_cors_allows_any_origin() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/health")
        .add_header("Origin", "http://localhost:4200")
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
