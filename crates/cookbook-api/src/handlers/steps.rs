use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cookbook_core::models::{
    CreateStepRequest, CreatedStep, MessageResponse, Step, UpdateStepRequest,
};

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::services::StepService;

/// List all preparation steps across every recipe
#[utoipa::path(
    get,
    path = "/api/steps",
    tag = "steps",
    responses(
        (status = 200, description = "All steps", body = Vec<Step>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service), fields(operation = "list_steps"))]
pub async fn list_steps(
    State(service): State<StepService>,
) -> Result<impl IntoResponse, HttpAppError> {
    let steps = service.list_all().await?;
    Ok(Json(steps))
}

/// Get a single step by ID
#[utoipa::path(
    get,
    path = "/api/steps/{id}",
    tag = "steps",
    params(("id" = i64, Path, description = "Step ID")),
    responses(
        (status = 200, description = "Step found", body = Step),
        (status = 404, description = "Step not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service), fields(operation = "get_step"))]
pub async fn get_step(
    Path(id): Path<i64>,
    State(service): State<StepService>,
) -> Result<impl IntoResponse, HttpAppError> {
    let step = service.get(id).await?;
    Ok(Json(step))
}

/// List the steps of one recipe
#[utoipa::path(
    get,
    path = "/api/recipes/{recipeId}/steps",
    tag = "steps",
    params(("recipeId" = i64, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Steps for the recipe, empty when none", body = Vec<Step>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service), fields(operation = "list_recipe_steps"))]
pub async fn list_recipe_steps(
    Path(recipe_id): Path<i64>,
    State(service): State<StepService>,
) -> Result<impl IntoResponse, HttpAppError> {
    let steps = service.list_by_recipe(recipe_id).await?;
    Ok(Json(steps))
}

/// Create a step
#[utoipa::path(
    post,
    path = "/api/steps",
    tag = "steps",
    request_body = CreateStepRequest,
    responses(
        (status = 201, description = "Step created", body = CreatedStep),
        (status = 400, description = "Missing required fields or malformed photo", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service, request), fields(operation = "create_step"))]
pub async fn create_step(
    State(service): State<StepService>,
    ValidatedJson(request): ValidatedJson<CreateStepRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let created = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a step's fields
#[utoipa::path(
    put,
    path = "/api/steps/{id}",
    tag = "steps",
    params(("id" = i64, Path, description = "Step ID")),
    request_body = UpdateStepRequest,
    responses(
        (status = 200, description = "Step updated", body = MessageResponse),
        (status = 400, description = "Missing recipe reference or malformed photo", body = ErrorResponse),
        (status = 404, description = "Step not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service, request), fields(operation = "update_step"))]
pub async fn update_step(
    Path(id): Path<i64>,
    State(service): State<StepService>,
    ValidatedJson(request): ValidatedJson<UpdateStepRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    service.update(id, request).await?;
    Ok(Json(MessageResponse::new("Step updated successfully")))
}

/// Delete a step
#[utoipa::path(
    delete,
    path = "/api/steps/{id}",
    tag = "steps",
    params(("id" = i64, Path, description = "Step ID")),
    responses(
        (status = 200, description = "Step deleted", body = MessageResponse),
        (status = 404, description = "Step not found", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(service), fields(operation = "delete_step"))]
pub async fn delete_step(
    Path(id): Path<i64>,
    State(service): State<StepService>,
) -> Result<impl IntoResponse, HttpAppError> {
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Step deleted successfully")))
}
