use cookbook_core::models::{
    CreateIngredientRequest, CreatedIngredient, Ingredient, UpdateIngredientRequest,
};
use cookbook_core::AppError;
use cookbook_db::IngredientRepository;
use validator::Validate;

use super::blank_to_null;

/// Ingredient CRUD. Recipe references are stored as given; a dangling
/// RecipeId is the client's to manage.
#[derive(Clone)]
pub struct IngredientService {
    repository: IngredientRepository,
}

impl IngredientService {
    pub fn new(repository: IngredientRepository) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Ingredient>, AppError> {
        self.repository.list_all().await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Ingredient, AppError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ingredient not found".to_string()))
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_by_recipe(&self, recipe_id: i64) -> Result<Vec<Ingredient>, AppError> {
        self.repository.list_by_recipe(recipe_id).await
    }

    /// Create an ingredient and echo the accepted fields with the new id.
    #[tracing::instrument(skip(self, request))]
    pub async fn create(
        &self,
        request: CreateIngredientRequest,
    ) -> Result<CreatedIngredient, AppError> {
        request.validate()?;
        let unit = blank_to_null(request.unit);
        let id = self
            .repository
            .create(
                &request.ingredient,
                request.qty,
                unit.as_deref(),
                request.recipe_id,
            )
            .await?;
        Ok(CreatedIngredient {
            id,
            ingredient: request.ingredient,
            qty: request.qty,
            unit,
            recipe_id: request.recipe_id,
        })
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdateIngredientRequest) -> Result<(), AppError> {
        request.validate()?;
        let unit = blank_to_null(request.unit);
        let updated = self
            .repository
            .update(
                id,
                request.ingredient.as_deref(),
                request.qty,
                unit.as_deref(),
                request.recipe_id,
            )
            .await?;
        if updated {
            Ok(())
        } else {
            Err(AppError::NotFound("Ingredient not found".to_string()))
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            Ok(())
        } else {
            Err(AppError::NotFound("Ingredient not found".to_string()))
        }
    }
}
