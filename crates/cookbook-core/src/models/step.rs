use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::photo;

/// Preparation step model. Steps carry an optional photo in the same
/// canonical base64 form as recipes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Step {
    pub id: i64,
    pub steps: String,
    pub duration: Option<String>,
    pub recipe_id: i64,
    pub photos: Option<String>,
}

/// Database row for the Steps table, photo column decoded as raw bytes.
#[derive(Debug, FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct StepRow {
    pub id: i64,
    pub steps: String,
    pub duration: Option<String>,
    pub recipe_id: i64,
    pub photos: Option<Vec<u8>>,
}

impl From<StepRow> for Step {
    fn from(row: StepRow) -> Self {
        Step {
            id: row.id,
            steps: row.steps,
            duration: row.duration,
            recipe_id: row.recipe_id,
            photos: photo::normalize_stored(row.photos),
        }
    }
}

/// Request DTO for creating a step
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStepRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Steps and RecipeId are required"))]
    pub steps: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, message = "Steps and RecipeId are required"))]
    pub recipe_id: i64,
    #[serde(default)]
    pub photos: Option<String>,
}

/// Request DTO for updating a step. As with ingredients, only the recipe
/// reference is validated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateStepRequest {
    #[serde(default)]
    pub steps: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, message = "RecipeId is required"))]
    pub recipe_id: i64,
    #[serde(default)]
    pub photos: Option<String>,
}

/// Response echo for a newly created step. The photo is accepted and
/// persisted but not echoed back.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedStep {
    #[serde(rename = "id")]
    pub id: i64,
    pub steps: String,
    pub duration: Option<String>,
    pub recipe_id: i64,
}
