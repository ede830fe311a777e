//! Application state
//!
//! The daemon state is built once at startup and shared behind an `Arc`.
//! Handlers extract the service they need through `FromRef` instead of
//! taking the whole state.

use std::sync::Arc;

use axum::extract::FromRef;
use cookbook_core::Config;
use cookbook_db::{IngredientRepository, RecipeRepository, StepRepository};
use sqlx::SqlitePool;

use crate::services::{IngredientService, RecipeService, StepService};

/// Shared application state: configuration, the pool handle, and one service
/// per entity. Every service holds its own clone of the pool-backed
/// repositories, so there is no global connection and no hidden singleton.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pool: SqlitePool,
    pub recipes: RecipeService,
    pub ingredients: IngredientService,
    pub steps: StepService,
}

impl AppState {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let recipe_repository = RecipeRepository::new(pool.clone());
        let ingredient_repository = IngredientRepository::new(pool.clone());
        let step_repository = StepRepository::new(pool.clone());

        let recipes = RecipeService::new(
            recipe_repository,
            ingredient_repository.clone(),
            step_repository.clone(),
            config.cascade_policy,
        );
        let ingredients = IngredientService::new(ingredient_repository);
        let steps = StepService::new(step_repository);

        AppState {
            config,
            pool,
            recipes,
            ingredients,
            steps,
        }
    }
}

impl FromRef<Arc<AppState>> for RecipeService {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.recipes.clone()
    }
}

impl FromRef<Arc<AppState>> for IngredientService {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.ingredients.clone()
    }
}

impl FromRef<Arc<AppState>> for StepService {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.steps.clone()
    }
}

// Compile-time check that the state stays shareable across tasks.
#[allow(dead_code)]
fn _assert_app_state_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppState>();
}
