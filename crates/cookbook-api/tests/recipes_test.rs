//! Recipe API integration tests.
//!
//! Run with: `cargo test -p cookbook-api --test recipes_test`

mod helpers;

use helpers::{
    count_rows, create_ingredient, create_recipe, create_step, setup_test_app,
    setup_test_app_with_policy,
};

use cookbook_core::config::CascadePolicy;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_and_get_recipe_roundtrip() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/api/recipes")
        .json(&json!({
            "Title": "Pancakes",
            "ServingSize": "4 servings",
            "Photos": "QUJD"
        }))
        .await;
    assert_eq!(response.status_code(), 201);

    let created = response.json::<Value>();
    let id = created["id"].as_i64().expect("id");
    assert_eq!(created["Title"], "Pancakes");
    assert_eq!(created["ServingSize"], "4 servings");
    // The photo is accepted but not echoed back on create.
    assert!(created.get("Photos").is_none());

    let response = client.get(&format!("/api/recipes/{}", id)).await;
    assert_eq!(response.status_code(), 200);
    let fetched = response.json::<Value>();
    assert_eq!(fetched["Id"], id);
    assert_eq!(fetched["Title"], "Pancakes");
    assert_eq!(fetched["ServingSize"], "4 servings");
    assert_eq!(fetched["Photos"], "QUJD");
}

#[tokio::test]
async fn test_create_recipe_missing_title_returns_400() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/recipes")
        .json(&json!({ "ServingSize": "2 servings" }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Title and ServingSize are required");

    assert_eq!(count_rows(app.pool(), "Recipes").await, 0);
}

#[tokio::test]
async fn test_create_recipe_empty_fields_count_as_missing() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/recipes")
        .json(&json!({ "Title": "", "ServingSize": "2 servings" }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Title and ServingSize are required");

    assert_eq!(count_rows(app.pool(), "Recipes").await, 0);
}

#[tokio::test]
async fn test_create_recipe_strips_data_uri_prefix() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/api/recipes")
        .json(&json!({
            "Title": "Tea",
            "ServingSize": "1 cup",
            "Photos": "data:image/png;base64,QUJD"
        }))
        .await;
    assert_eq!(response.status_code(), 201);
    let id = response.json::<Value>()["id"].as_i64().expect("id");

    // The stored column holds the bare payload, no prefix.
    let stored: (String,) = sqlx::query_as("SELECT Photos FROM Recipes WHERE Id = ?")
        .bind(id)
        .fetch_one(app.pool())
        .await
        .expect("stored photo");
    assert_eq!(stored.0, "QUJD");

    let fetched = client
        .get(&format!("/api/recipes/{}", id))
        .await
        .json::<Value>();
    assert_eq!(fetched["Photos"], "QUJD");
}

#[tokio::test]
async fn test_create_recipe_rejects_marker_without_payload() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/recipes")
        .json(&json!({
            "Title": "Tea",
            "ServingSize": "1 cup",
            "Photos": "data:image/png;base64"
        }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert!(
        body["error"].as_str().expect("error").contains("Photos"),
        "unexpected error body: {}",
        body
    );

    assert_eq!(count_rows(app.pool(), "Recipes").await, 0);
}

#[tokio::test]
async fn test_create_recipe_empty_photo_stored_as_null() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/api/recipes")
        .json(&json!({ "Title": "Toast", "ServingSize": "1", "Photos": "" }))
        .await;
    assert_eq!(response.status_code(), 201);
    let id = response.json::<Value>()["id"].as_i64().expect("id");

    let fetched = client
        .get(&format!("/api/recipes/{}", id))
        .await
        .json::<Value>();
    assert!(fetched["Photos"].is_null());
}

#[tokio::test]
async fn test_malformed_body_returns_400() {
    let app = setup_test_app().await;

    // An array is not an object; deserialization fails before validation.
    let response = app.client().post("/api/recipes").json(&json!([1, 2, 3])).await;
    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert!(body["error"]
        .as_str()
        .expect("error")
        .contains("Invalid request body"));
}

#[tokio::test]
async fn test_list_recipes_returns_all_in_id_order() {
    let app = setup_test_app().await;
    let client = app.client();

    let first = create_recipe(client, "Pancakes", "4 servings").await;
    let second = create_recipe(client, "Omelette", "1 serving").await;

    let response = client.get("/api/recipes").await;
    assert_eq!(response.status_code(), 200);
    let recipes = response.json::<Vec<Value>>();
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0]["Id"].as_i64(), Some(first));
    assert_eq!(recipes[1]["Id"].as_i64(), Some(second));
}

#[tokio::test]
async fn test_get_missing_recipe_returns_404() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/recipes/99").await;
    assert_eq!(response.status_code(), 404);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Recipe not found");
}

#[tokio::test]
async fn test_update_recipe_replaces_fields() {
    let app = setup_test_app().await;
    let client = app.client();

    let id = create_recipe(client, "Pancakes", "4 servings").await;

    let response = client
        .put(&format!("/api/recipes/{}", id))
        .json(&json!({ "Title": "Crepes", "ServingSize": "2 servings" }))
        .await;
    assert_eq!(response.status_code(), 200);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Recipe updated successfully");

    let fetched = client
        .get(&format!("/api/recipes/{}", id))
        .await
        .json::<Value>();
    assert_eq!(fetched["Title"], "Crepes");
    assert_eq!(fetched["ServingSize"], "2 servings");
}

#[tokio::test]
async fn test_update_recipe_without_photo_clears_stored_photo() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/api/recipes")
        .json(&json!({ "Title": "Tea", "ServingSize": "1 cup", "Photos": "QUJD" }))
        .await;
    let id = response.json::<Value>()["id"].as_i64().expect("id");

    let response = client
        .put(&format!("/api/recipes/{}", id))
        .json(&json!({ "Title": "Tea", "ServingSize": "1 cup" }))
        .await;
    assert_eq!(response.status_code(), 200);

    let fetched = client
        .get(&format!("/api/recipes/{}", id))
        .await
        .json::<Value>();
    assert!(fetched["Photos"].is_null());
}

#[tokio::test]
async fn test_update_recipe_missing_fields_returns_400_and_keeps_row() {
    let app = setup_test_app().await;
    let client = app.client();

    let id = create_recipe(client, "Pancakes", "4 servings").await;

    let response = client
        .put(&format!("/api/recipes/{}", id))
        .json(&json!({ "Title": "Crepes" }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Title and ServingSize are required");

    let fetched = client
        .get(&format!("/api/recipes/{}", id))
        .await
        .json::<Value>();
    assert_eq!(fetched["Title"], "Pancakes");
}

#[tokio::test]
async fn test_update_missing_recipe_returns_404() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .put("/api/recipes/99")
        .json(&json!({ "Title": "Ghost", "ServingSize": "0" }))
        .await;
    assert_eq!(response.status_code(), 404);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Recipe not found");
}

#[tokio::test]
async fn test_delete_recipe_then_repeat_returns_404() {
    let app = setup_test_app().await;
    let client = app.client();

    let id = create_recipe(client, "Pancakes", "4 servings").await;

    let response = client.delete(&format!("/api/recipes/{}", id)).await;
    assert_eq!(response.status_code(), 200);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Recipe deleted successfully");

    let response = client.delete(&format!("/api/recipes/{}", id)).await;
    assert_eq!(response.status_code(), 404);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Recipe not found");
}

#[tokio::test]
async fn test_delete_recipe_default_policy_leaves_children_in_place() {
    let app = setup_test_app().await;
    let client = app.client();

    let id = create_recipe(client, "Pancakes", "4 servings").await;
    create_ingredient(client, id, "Flour").await;
    create_step(client, id, "Mix the batter").await;

    let response = client.delete(&format!("/api/recipes/{}", id)).await;
    assert_eq!(response.status_code(), 200);

    // Children survive as orphans and stay reachable by recipe id.
    assert_eq!(count_rows(app.pool(), "Ingredients").await, 1);
    assert_eq!(count_rows(app.pool(), "Steps").await, 1);

    let orphans = client
        .get(&format!("/api/recipes/{}/ingredients", id))
        .await
        .json::<Vec<Value>>();
    assert_eq!(orphans.len(), 1);
}

#[tokio::test]
async fn test_delete_recipe_cascade_policy_removes_children() {
    let app = setup_test_app_with_policy(CascadePolicy::Cascade).await;
    let client = app.client();

    let id = create_recipe(client, "Pancakes", "4 servings").await;
    create_ingredient(client, id, "Flour").await;
    create_ingredient(client, id, "Milk").await;
    create_step(client, id, "Mix the batter").await;

    let response = client.delete(&format!("/api/recipes/{}", id)).await;
    assert_eq!(response.status_code(), 200);

    assert_eq!(count_rows(app.pool(), "Recipes").await, 0);
    assert_eq!(count_rows(app.pool(), "Ingredients").await, 0);
    assert_eq!(count_rows(app.pool(), "Steps").await, 0);
}

#[tokio::test]
async fn test_delete_recipe_reject_policy_returns_409_until_children_removed() {
    let app = setup_test_app_with_policy(CascadePolicy::Reject).await;
    let client = app.client();

    let id = create_recipe(client, "Pancakes", "4 servings").await;
    let ingredient_id = create_ingredient(client, id, "Flour").await;

    let response = client.delete(&format!("/api/recipes/{}", id)).await;
    assert_eq!(response.status_code(), 409);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Recipe still has ingredients or steps");
    assert_eq!(count_rows(app.pool(), "Recipes").await, 1);

    let response = client
        .delete(&format!("/api/ingredients/{}", ingredient_id))
        .await;
    assert_eq!(response.status_code(), 200);

    let response = client.delete(&format!("/api/recipes/{}", id)).await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(count_rows(app.pool(), "Recipes").await, 0);
}
