//! Domain route groups (recipes, ingredients, steps).
//!
//! Per-recipe child listings are mounted under /api/recipes alongside the
//! flat collection routes; different segment counts keep them from clashing.

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn recipe_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/recipes", get(handlers::recipes::list_recipes))
        .route("/api/recipes", post(handlers::recipes::create_recipe))
        .route("/api/recipes/{id}", get(handlers::recipes::get_recipe))
        .route("/api/recipes/{id}", put(handlers::recipes::update_recipe))
        .route("/api/recipes/{id}", delete(handlers::recipes::delete_recipe))
}

pub fn ingredient_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/ingredients",
            get(handlers::ingredients::list_ingredients),
        )
        .route(
            "/api/ingredients",
            post(handlers::ingredients::create_ingredient),
        )
        .route(
            "/api/ingredients/{id}",
            get(handlers::ingredients::get_ingredient),
        )
        .route(
            "/api/ingredients/{id}",
            put(handlers::ingredients::update_ingredient),
        )
        .route(
            "/api/ingredients/{id}",
            delete(handlers::ingredients::delete_ingredient),
        )
        .route(
            "/api/recipes/{recipeId}/ingredients",
            get(handlers::ingredients::list_recipe_ingredients),
        )
}

pub fn step_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/steps", get(handlers::steps::list_steps))
        .route("/api/steps", post(handlers::steps::create_step))
        .route("/api/steps/{id}", get(handlers::steps::get_step))
        .route("/api/steps/{id}", put(handlers::steps::update_step))
        .route("/api/steps/{id}", delete(handlers::steps::delete_step))
        .route(
            "/api/recipes/{recipeId}/steps",
            get(handlers::steps::list_recipe_steps),
        )
}
