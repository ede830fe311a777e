use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::photo;

/// Recipe model as it travels over the wire. The photo field carries
/// canonical base64 text in both directions; only the browser ever sees a
/// data-URI prefix.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub serving_size: String,
    pub photos: Option<String>,
}

/// Database row for the Recipes table. The photo column decodes as raw
/// bytes so rows physically stored as TEXT or BLOB read identically.
#[derive(Debug, FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct RecipeRow {
    pub id: i64,
    pub title: String,
    pub serving_size: String,
    pub photos: Option<Vec<u8>>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: row.id,
            title: row.title,
            serving_size: row.serving_size,
            photos: photo::normalize_stored(row.photos),
        }
    }
}

/// Request DTO for creating a recipe
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRecipeRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and ServingSize are required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and ServingSize are required"))]
    pub serving_size: String,
    #[serde(default)]
    pub photos: Option<String>,
}

/// Request DTO for updating a recipe. Updates are full replacements: an
/// absent photo clears the stored one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRecipeRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and ServingSize are required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Title and ServingSize are required"))]
    pub serving_size: String,
    #[serde(default)]
    pub photos: Option<String>,
}

/// Response echo for a newly created recipe. The identity key is lowercase
/// while the echoed fields keep their wire casing; the photo is not echoed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedRecipe {
    #[serde(rename = "id")]
    pub id: i64,
    pub title: String,
    pub serving_size: String,
}
