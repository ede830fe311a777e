//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p cookbook-api --test recipes_test`
//! or `cargo test -p cookbook-api`. Every test gets its own in-memory
//! database, so tests never observe each other's rows.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use cookbook_api::setup::routes;
use cookbook_api::state::AppState;
use cookbook_core::config::CascadePolicy;
use cookbook_core::Config;
use cookbook_db::{connect_pool, run_migrations};
use sqlx::SqlitePool;

/// Test application: server plus direct pool access for store-side checks.
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Setup test app with an isolated in-memory database and the default
/// orphaning delete policy.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_policy(CascadePolicy::Orphan).await
}

/// Setup test app with an explicit cascade policy.
pub async fn setup_test_app_with_policy(cascade_policy: CascadePolicy) -> TestApp {
    // A single connection keeps the in-memory database alive across requests.
    let pool = connect_pool("sqlite::memory:", 1, Duration::from_secs(30))
        .await
        .expect("Failed to open in-memory database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let config = create_test_config(cascade_policy);
    let state = Arc::new(AppState::new(config.clone(), pool.clone()));

    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp { server, pool }
}

fn create_test_config(cascade_policy: CascadePolicy) -> Config {
    Config {
        server_port: 3001,
        cors_origins: vec!["*".to_string()],
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        db_timeout_seconds: 30,
        max_body_size_bytes: 50 * 1024 * 1024,
        cascade_policy,
        environment: "test".to_string(),
    }
}

/// POST a recipe and return its assigned id.
pub async fn create_recipe(server: &TestServer, title: &str, serving_size: &str) -> i64 {
    let response = server
        .post("/api/recipes")
        .json(&serde_json::json!({ "Title": title, "ServingSize": serving_size }))
        .await;
    assert_eq!(response.status_code(), 201);
    response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("created recipe id")
}

/// POST an ingredient for a recipe and return its assigned id.
pub async fn create_ingredient(server: &TestServer, recipe_id: i64, name: &str) -> i64 {
    let response = server
        .post("/api/ingredients")
        .json(&serde_json::json!({ "Ingredient": name, "RecipeId": recipe_id }))
        .await;
    assert_eq!(response.status_code(), 201);
    response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("created ingredient id")
}

/// POST a step for a recipe and return its assigned id.
pub async fn create_step(server: &TestServer, recipe_id: i64, text: &str) -> i64 {
    let response = server
        .post("/api/steps")
        .json(&serde_json::json!({ "Steps": text, "RecipeId": recipe_id }))
        .await;
    assert_eq!(response.status_code(), 201);
    response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("created step id")
}

/// Count rows in a table through the shared pool.
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("count query");
    row.0
}
