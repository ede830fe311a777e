//! OpenAPI documentation.
//! The HTTP surface is small enough to document exhaustively; every handler
//! and schema is listed here and the document is served at /api/openapi.json.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use cookbook_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cookbook API",
        version = "0.1.0",
        description = "Recipe management API covering recipes, their ingredients, and their preparation steps. Photos travel as base64 text; the server strips any data-URI prefix before storage."
    ),
    paths(
        // Recipes
        handlers::recipes::list_recipes,
        handlers::recipes::get_recipe,
        handlers::recipes::create_recipe,
        handlers::recipes::update_recipe,
        handlers::recipes::delete_recipe,
        // Ingredients
        handlers::ingredients::list_ingredients,
        handlers::ingredients::get_ingredient,
        handlers::ingredients::list_recipe_ingredients,
        handlers::ingredients::create_ingredient,
        handlers::ingredients::update_ingredient,
        handlers::ingredients::delete_ingredient,
        // Steps
        handlers::steps::list_steps,
        handlers::steps::get_step,
        handlers::steps::list_recipe_steps,
        handlers::steps::create_step,
        handlers::steps::update_step,
        handlers::steps::delete_step,
    ),
    components(
        schemas(
            // Core models
            models::Recipe,
            models::Ingredient,
            models::Step,
            // Request DTOs
            models::CreateRecipeRequest,
            models::UpdateRecipeRequest,
            models::CreateIngredientRequest,
            models::UpdateIngredientRequest,
            models::CreateStepRequest,
            models::UpdateStepRequest,
            // Response echoes
            models::CreatedRecipe,
            models::CreatedIngredient,
            models::CreatedStep,
            models::MessageResponse,
            // Error
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "recipes", description = "Recipe CRUD operations"),
        (name = "ingredients", description = "Ingredient CRUD and per-recipe listing"),
        (name = "steps", description = "Preparation step CRUD and per-recipe listing")
    )
)]
pub struct ApiDoc;
