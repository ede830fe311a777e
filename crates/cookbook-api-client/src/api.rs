//! Domain methods for the Cookbook API client.
//!
//! Request and response types are the shared wire models from
//! `cookbook_core::models`; only the health probe shape is defined here.

use crate::ApiClient;
use anyhow::Result;
use cookbook_core::models::{
    CreateIngredientRequest, CreateRecipeRequest, CreateStepRequest, CreatedIngredient,
    CreatedRecipe, CreatedStep, Ingredient, MessageResponse, Recipe, Step,
    UpdateIngredientRequest, UpdateRecipeRequest, UpdateStepRequest,
};

/// Health probe response. Matches the API handler shape.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl ApiClient {
    /// Check that the API is up.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get("/health").await
    }

    /// List all recipes, ordered by id.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        self.get("/api/recipes").await
    }

    /// Get a single recipe by id.
    pub async fn get_recipe(&self, id: i64) -> Result<Recipe> {
        self.get(&format!("/api/recipes/{}", id)).await
    }

    /// Create a recipe. Returns the server echo carrying the assigned id.
    pub async fn create_recipe(&self, request: &CreateRecipeRequest) -> Result<CreatedRecipe> {
        self.post_json("/api/recipes", request).await
    }

    /// Replace a recipe's fields.
    pub async fn update_recipe(
        &self,
        id: i64,
        request: &UpdateRecipeRequest,
    ) -> Result<MessageResponse> {
        self.put_json(&format!("/api/recipes/{}", id), request).await
    }

    /// Delete a recipe. Children are handled per the server's cascade policy.
    pub async fn delete_recipe(&self, id: i64) -> Result<()> {
        self.delete(&format!("/api/recipes/{}", id)).await
    }

    /// List all ingredients across recipes.
    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>> {
        self.get("/api/ingredients").await
    }

    /// Get a single ingredient by id.
    pub async fn get_ingredient(&self, id: i64) -> Result<Ingredient> {
        self.get(&format!("/api/ingredients/{}", id)).await
    }

    /// List the ingredients of one recipe.
    pub async fn list_recipe_ingredients(&self, recipe_id: i64) -> Result<Vec<Ingredient>> {
        self.get(&format!("/api/recipes/{}/ingredients", recipe_id))
            .await
    }

    /// Create an ingredient. Returns the server echo carrying the assigned id.
    pub async fn create_ingredient(
        &self,
        request: &CreateIngredientRequest,
    ) -> Result<CreatedIngredient> {
        self.post_json("/api/ingredients", request).await
    }

    /// Replace an ingredient's fields.
    pub async fn update_ingredient(
        &self,
        id: i64,
        request: &UpdateIngredientRequest,
    ) -> Result<MessageResponse> {
        self.put_json(&format!("/api/ingredients/{}", id), request)
            .await
    }

    /// Delete an ingredient.
    pub async fn delete_ingredient(&self, id: i64) -> Result<()> {
        self.delete(&format!("/api/ingredients/{}", id)).await
    }

    /// List all steps across recipes.
    pub async fn list_steps(&self) -> Result<Vec<Step>> {
        self.get("/api/steps").await
    }

    /// Get a single step by id.
    pub async fn get_step(&self, id: i64) -> Result<Step> {
        self.get(&format!("/api/steps/{}", id)).await
    }

    /// List the steps of one recipe.
    pub async fn list_recipe_steps(&self, recipe_id: i64) -> Result<Vec<Step>> {
        self.get(&format!("/api/recipes/{}/steps", recipe_id)).await
    }

    /// Create a step. Returns the server echo carrying the assigned id.
    pub async fn create_step(&self, request: &CreateStepRequest) -> Result<CreatedStep> {
        self.post_json("/api/steps", request).await
    }

    /// Replace a step's fields.
    pub async fn update_step(
        &self,
        id: i64,
        request: &UpdateStepRequest,
    ) -> Result<MessageResponse> {
        self.put_json(&format!("/api/steps/{}", id), request).await
    }

    /// Delete a step.
    pub async fn delete_step(&self, id: i64) -> Result<()> {
        self.delete(&format!("/api/steps/{}", id)).await
    }
}
