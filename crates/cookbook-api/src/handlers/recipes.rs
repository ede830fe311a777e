use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cookbook_core::models::{
    CreateRecipeRequest, CreatedRecipe, MessageResponse, Recipe, UpdateRecipeRequest,
};

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::services::RecipeService;

/// List all recipes
#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes", body = Vec<Recipe>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service), fields(operation = "list_recipes"))]
pub async fn list_recipes(
    State(service): State<RecipeService>,
) -> Result<impl IntoResponse, HttpAppError> {
    let recipes = service.list_all().await?;
    Ok(Json(recipes))
}

/// Get a single recipe by ID
#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(("id" = i64, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Recipe found", body = Recipe),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service), fields(operation = "get_recipe"))]
pub async fn get_recipe(
    Path(id): Path<i64>,
    State(service): State<RecipeService>,
) -> Result<impl IntoResponse, HttpAppError> {
    let recipe = service.get(id).await?;
    Ok(Json(recipe))
}

/// Create a recipe
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = CreatedRecipe),
        (status = 400, description = "Missing required fields or malformed photo", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service, request), fields(operation = "create_recipe"))]
pub async fn create_recipe(
    State(service): State<RecipeService>,
    ValidatedJson(request): ValidatedJson<CreateRecipeRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let created = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a recipe's fields
#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(("id" = i64, Path, description = "Recipe ID")),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated", body = MessageResponse),
        (status = 400, description = "Missing required fields or malformed photo", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service, request), fields(operation = "update_recipe"))]
pub async fn update_recipe(
    Path(id): Path<i64>,
    State(service): State<RecipeService>,
    ValidatedJson(request): ValidatedJson<UpdateRecipeRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    service.update(id, request).await?;
    Ok(Json(MessageResponse::new("Recipe updated successfully")))
}

/// Delete a recipe
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(("id" = i64, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Recipe deleted", body = MessageResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 409, description = "Recipe still has dependent records", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service), fields(operation = "delete_recipe"))]
pub async fn delete_recipe(
    Path(id): Path<i64>,
    State(service): State<RecipeService>,
) -> Result<impl IntoResponse, HttpAppError> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Recipe deleted successfully")))
}
