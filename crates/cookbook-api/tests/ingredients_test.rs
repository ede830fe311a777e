//! Ingredient API integration tests.
//!
//! Run with: `cargo test -p cookbook-api --test ingredients_test`

mod helpers;

use helpers::{count_rows, create_ingredient, create_recipe, setup_test_app};

use serde_json::{json, Value};

#[tokio::test]
async fn test_create_and_get_ingredient_roundtrip() {
    let app = setup_test_app().await;
    let client = app.client();

    let recipe_id = create_recipe(client, "Pancakes", "4 servings").await;

    let response = client
        .post("/api/ingredients")
        .json(&json!({
            "Ingredient": "Flour",
            "Qty": 2.5,
            "Unit": "cups",
            "RecipeId": recipe_id
        }))
        .await;
    assert_eq!(response.status_code(), 201);
    let created = response.json::<Value>();
    let id = created["id"].as_i64().expect("id");
    assert_eq!(created["Ingredient"], "Flour");
    assert_eq!(created["Qty"], 2.5);
    assert_eq!(created["Unit"], "cups");
    assert_eq!(created["RecipeId"].as_i64(), Some(recipe_id));

    let response = client.get(&format!("/api/ingredients/{}", id)).await;
    assert_eq!(response.status_code(), 200);
    let fetched = response.json::<Value>();
    assert_eq!(fetched["Id"], id);
    assert_eq!(fetched["Ingredient"], "Flour");
    assert_eq!(fetched["Qty"], 2.5);
    assert_eq!(fetched["Unit"], "cups");
}

#[tokio::test]
async fn test_create_ingredient_missing_name_returns_400() {
    let app = setup_test_app().await;
    let client = app.client();

    let recipe_id = create_recipe(client, "Pancakes", "4 servings").await;

    let response = client
        .post("/api/ingredients")
        .json(&json!({ "Qty": 1.0, "RecipeId": recipe_id }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Ingredient and RecipeId are required");

    assert_eq!(count_rows(app.pool(), "Ingredients").await, 0);
}

#[tokio::test]
async fn test_create_ingredient_missing_recipe_id_returns_400() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/ingredients")
        .json(&json!({ "Ingredient": "Flour" }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Ingredient and RecipeId are required");

    assert_eq!(count_rows(app.pool(), "Ingredients").await, 0);
}

#[tokio::test]
async fn test_create_ingredient_non_numeric_qty_returns_400() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/ingredients")
        .json(&json!({ "Ingredient": "Flour", "Qty": "abc", "RecipeId": 1 }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert!(body["error"]
        .as_str()
        .expect("error")
        .contains("Invalid request body"));

    assert_eq!(count_rows(app.pool(), "Ingredients").await, 0);
}

#[tokio::test]
async fn test_create_ingredient_with_dangling_recipe_id_is_accepted() {
    let app = setup_test_app().await;

    // No referential check against Recipes.
    let response = app
        .client()
        .post("/api/ingredients")
        .json(&json!({ "Ingredient": "Flour", "RecipeId": 999 }))
        .await;
    assert_eq!(response.status_code(), 201);
    assert_eq!(count_rows(app.pool(), "Ingredients").await, 1);
}

#[tokio::test]
async fn test_create_ingredient_blank_unit_stored_as_null() {
    let app = setup_test_app().await;
    let client = app.client();

    let recipe_id = create_recipe(client, "Pancakes", "4 servings").await;

    let response = client
        .post("/api/ingredients")
        .json(&json!({
            "Ingredient": "Salt",
            "Unit": "",
            "RecipeId": recipe_id
        }))
        .await;
    assert_eq!(response.status_code(), 201);
    let created = response.json::<Value>();
    assert!(created["Unit"].is_null());

    let id = created["id"].as_i64().expect("id");
    let fetched = client
        .get(&format!("/api/ingredients/{}", id))
        .await
        .json::<Value>();
    assert!(fetched["Unit"].is_null());
}

#[tokio::test]
async fn test_zero_qty_survives_roundtrip() {
    let app = setup_test_app().await;
    let client = app.client();

    let recipe_id = create_recipe(client, "Pancakes", "4 servings").await;

    let response = client
        .post("/api/ingredients")
        .json(&json!({ "Ingredient": "Salt", "Qty": 0, "RecipeId": recipe_id }))
        .await;
    assert_eq!(response.status_code(), 201);
    let id = response.json::<Value>()["id"].as_i64().expect("id");

    let fetched = client
        .get(&format!("/api/ingredients/{}", id))
        .await
        .json::<Value>();
    assert_eq!(fetched["Qty"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_list_recipe_ingredients_is_scoped_to_recipe() {
    let app = setup_test_app().await;
    let client = app.client();

    let pancakes = create_recipe(client, "Pancakes", "4 servings").await;
    let omelette = create_recipe(client, "Omelette", "1 serving").await;

    let response = client
        .get(&format!("/api/recipes/{}/ingredients", pancakes))
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Vec<Value>>().len(), 0);

    create_ingredient(client, pancakes, "Flour").await;
    create_ingredient(client, pancakes, "Milk").await;
    create_ingredient(client, omelette, "Eggs").await;

    let scoped = client
        .get(&format!("/api/recipes/{}/ingredients", pancakes))
        .await
        .json::<Vec<Value>>();
    assert_eq!(scoped.len(), 2);
    assert!(scoped
        .iter()
        .all(|i| i["RecipeId"].as_i64() == Some(pancakes)));

    let all = client.get("/api/ingredients").await.json::<Vec<Value>>();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_get_missing_ingredient_returns_404() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/ingredients/99").await;
    assert_eq!(response.status_code(), 404);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Ingredient not found");
}

#[tokio::test]
async fn test_update_ingredient_replaces_fields() {
    let app = setup_test_app().await;
    let client = app.client();

    let recipe_id = create_recipe(client, "Pancakes", "4 servings").await;
    let id = create_ingredient(client, recipe_id, "Flour").await;

    let response = client
        .put(&format!("/api/ingredients/{}", id))
        .json(&json!({
            "Ingredient": "Buckwheat flour",
            "Qty": 3.0,
            "Unit": "cups",
            "RecipeId": recipe_id
        }))
        .await;
    assert_eq!(response.status_code(), 200);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Ingredient updated successfully");

    let fetched = client
        .get(&format!("/api/ingredients/{}", id))
        .await
        .json::<Value>();
    assert_eq!(fetched["Ingredient"], "Buckwheat flour");
    assert_eq!(fetched["Qty"], 3.0);
    assert_eq!(fetched["Unit"], "cups");
}

#[tokio::test]
async fn test_update_ingredient_missing_recipe_id_returns_400() {
    let app = setup_test_app().await;
    let client = app.client();

    let recipe_id = create_recipe(client, "Pancakes", "4 servings").await;
    let id = create_ingredient(client, recipe_id, "Flour").await;

    let response = client
        .put(&format!("/api/ingredients/{}", id))
        .json(&json!({ "Ingredient": "Flour" }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "RecipeId is required");
}

#[tokio::test]
async fn test_update_missing_ingredient_returns_404() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .put("/api/ingredients/999")
        .json(&json!({ "Ingredient": "Ghost", "RecipeId": 1 }))
        .await;
    assert_eq!(response.status_code(), 404);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Ingredient not found");
}

#[tokio::test]
async fn test_delete_ingredient_then_repeat_returns_404() {
    let app = setup_test_app().await;
    let client = app.client();

    let recipe_id = create_recipe(client, "Pancakes", "4 servings").await;
    let id = create_ingredient(client, recipe_id, "Flour").await;

    let response = client.delete(&format!("/api/ingredients/{}", id)).await;
    assert_eq!(response.status_code(), 200);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Ingredient deleted successfully");
    assert_eq!(count_rows(app.pool(), "Ingredients").await, 0);

    let response = client.delete(&format!("/api/ingredients/{}", id)).await;
    assert_eq!(response.status_code(), 404);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Ingredient not found");
}
