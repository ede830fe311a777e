use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cookbook_core::models::{
    CreateIngredientRequest, CreatedIngredient, Ingredient, MessageResponse,
    UpdateIngredientRequest,
};

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::services::IngredientService;

/// List all ingredients across every recipe
#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = "ingredients",
    responses(
        (status = 200, description = "All ingredients", body = Vec<Ingredient>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service), fields(operation = "list_ingredients"))]
pub async fn list_ingredients(
    State(service): State<IngredientService>,
) -> Result<impl IntoResponse, HttpAppError> {
    let ingredients = service.list_all().await?;
    Ok(Json(ingredients))
}

/// Get a single ingredient by ID
#[utoipa::path(
    get,
    path = "/api/ingredients/{id}",
    tag = "ingredients",
    params(("id" = i64, Path, description = "Ingredient ID")),
    responses(
        (status = 200, description = "Ingredient found", body = Ingredient),
        (status = 404, description = "Ingredient not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service), fields(operation = "get_ingredient"))]
pub async fn get_ingredient(
    Path(id): Path<i64>,
    State(service): State<IngredientService>,
) -> Result<impl IntoResponse, HttpAppError> {
    let ingredient = service.get(id).await?;
    Ok(Json(ingredient))
}

/// List the ingredients of one recipe
#[utoipa::path(
    get,
    path = "/api/recipes/{recipeId}/ingredients",
    tag = "ingredients",
    params(("recipeId" = i64, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Ingredients for the recipe, empty when none", body = Vec<Ingredient>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service), fields(operation = "list_recipe_ingredients"))]
pub async fn list_recipe_ingredients(
    Path(recipe_id): Path<i64>,
    State(service): State<IngredientService>,
) -> Result<impl IntoResponse, HttpAppError> {
    let ingredients = service.list_by_recipe(recipe_id).await?;
    Ok(Json(ingredients))
}

/// Create an ingredient
#[utoipa::path(
    post,
    path = "/api/ingredients",
    tag = "ingredients",
    request_body = CreateIngredientRequest,
    responses(
        (status = 201, description = "Ingredient created", body = CreatedIngredient),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service, request), fields(operation = "create_ingredient"))]
pub async fn create_ingredient(
    State(service): State<IngredientService>,
    ValidatedJson(request): ValidatedJson<CreateIngredientRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let created = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an ingredient's fields
#[utoipa::path(
    put,
    path = "/api/ingredients/{id}",
    tag = "ingredients",
    params(("id" = i64, Path, description = "Ingredient ID")),
    request_body = UpdateIngredientRequest,
    responses(
        (status = 200, description = "Ingredient updated", body = MessageResponse),
        (status = 400, description = "Missing recipe reference", body = ErrorResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service, request), fields(operation = "update_ingredient"))]
pub async fn update_ingredient(
    Path(id): Path<i64>,
    State(service): State<IngredientService>,
    ValidatedJson(request): ValidatedJson<UpdateIngredientRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    service.update(id, request).await?;
    Ok(Json(MessageResponse::new("Ingredient updated successfully")))
}

/// Delete an ingredient
#[utoipa::path(
    delete,
    path = "/api/ingredients/{id}",
    tag = "ingredients",
    params(("id" = i64, Path, description = "Ingredient ID")),
    responses(
        (status = 200, description = "Ingredient deleted", body = MessageResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service), fields(operation = "delete_ingredient"))]
pub async fn delete_ingredient(
    Path(id): Path<i64>,
    State(service): State<IngredientService>,
) -> Result<impl IntoResponse, HttpAppError> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Ingredient deleted successfully")))
}
