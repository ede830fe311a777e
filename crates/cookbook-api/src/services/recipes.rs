use cookbook_core::config::CascadePolicy;
use cookbook_core::models::{CreateRecipeRequest, CreatedRecipe, Recipe, UpdateRecipeRequest};
use cookbook_core::AppError;
use cookbook_db::{IngredientRepository, RecipeRepository, StepRepository};
use validator::Validate;

use super::normalize_photo;

/// Recipe CRUD plus the delete policy for dependent ingredients and steps.
#[derive(Clone)]
pub struct RecipeService {
    recipes: RecipeRepository,
    ingredients: IngredientRepository,
    steps: StepRepository,
    cascade_policy: CascadePolicy,
}

impl RecipeService {
    pub fn new(
        recipes: RecipeRepository,
        ingredients: IngredientRepository,
        steps: StepRepository,
        cascade_policy: CascadePolicy,
    ) -> Self {
        Self {
            recipes,
            ingredients,
            steps,
            cascade_policy,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Recipe>, AppError> {
        self.recipes.list_all().await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Recipe, AppError> {
        self.recipes
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))
    }

    /// Create a recipe and echo the accepted fields with the new id.
    #[tracing::instrument(skip(self, request))]
    pub async fn create(&self, request: CreateRecipeRequest) -> Result<CreatedRecipe, AppError> {
        request.validate()?;
        let photos = normalize_photo(request.photos.as_deref())?;
        let id = self
            .recipes
            .create(&request.title, &request.serving_size, photos.as_deref())
            .await?;
        Ok(CreatedRecipe {
            id,
            title: request.title,
            serving_size: request.serving_size,
        })
    }

    /// Full replacement of a recipe's fields; an absent photo clears the
    /// stored one.
    #[tracing::instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdateRecipeRequest) -> Result<(), AppError> {
        request.validate()?;
        let photos = normalize_photo(request.photos.as_deref())?;
        let updated = self
            .recipes
            .update(id, &request.title, &request.serving_size, photos.as_deref())
            .await?;
        if updated {
            Ok(())
        } else {
            Err(AppError::NotFound("Recipe not found".to_string()))
        }
    }

    /// Delete a recipe, applying the configured policy to its ingredients
    /// and steps first.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        match self.cascade_policy {
            CascadePolicy::Orphan => {}
            CascadePolicy::Cascade => {
                let ingredients = self.ingredients.delete_by_recipe(id).await?;
                let steps = self.steps.delete_by_recipe(id).await?;
                if ingredients + steps > 0 {
                    tracing::debug!(
                        recipe_id = id,
                        ingredients,
                        steps,
                        "Removed dependent records before recipe delete"
                    );
                }
            }
            CascadePolicy::Reject => {
                let dependents = self.ingredients.count_by_recipe(id).await?
                    + self.steps.count_by_recipe(id).await?;
                if dependents > 0 {
                    return Err(AppError::Conflict(
                        "Recipe still has ingredients or steps".to_string(),
                    ));
                }
            }
        }

        let deleted = self.recipes.delete(id).await?;
        if deleted {
            Ok(())
        } else {
            Err(AppError::NotFound("Recipe not found".to_string()))
        }
    }
}
