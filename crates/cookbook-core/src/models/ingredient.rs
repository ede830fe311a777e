use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Ingredient model. `recipe_id` is stored as given; nothing at this layer
/// checks that the referenced recipe exists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Ingredient {
    pub id: i64,
    pub ingredient: String,
    pub qty: Option<f64>,
    pub unit: Option<String>,
    pub recipe_id: i64,
}

/// Request DTO for creating an ingredient
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateIngredientRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Ingredient and RecipeId are required"))]
    pub ingredient: String,
    #[serde(default)]
    pub qty: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, message = "Ingredient and RecipeId are required"))]
    pub recipe_id: i64,
}

/// Request DTO for updating an ingredient. Only the recipe reference is
/// validated; the store's own constraints catch a missing name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateIngredientRequest {
    #[serde(default)]
    pub ingredient: Option<String>,
    #[serde(default)]
    pub qty: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, message = "RecipeId is required"))]
    pub recipe_id: i64,
}

/// Response echo for a newly created ingredient
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedIngredient {
    #[serde(rename = "id")]
    pub id: i64,
    pub ingredient: String,
    pub qty: Option<f64>,
    pub unit: Option<String>,
    pub recipe_id: i64,
}
