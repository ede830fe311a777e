//! Recipe detail assembly and the edit workflow.
//!
//! The detail view of a recipe is assembled from three requests issued
//! strictly in sequence, each gated on the one before it. `RecipeEditor`
//! drives the view's lifecycle on top of that: load, view, edit, save, and
//! child management. Every mutation trusts the server response before it
//! touches local state, so the local collections always mirror what the
//! server accepted.

use anyhow::{Context, Result};
use async_trait::async_trait;
use cookbook_core::models::{
    CreateIngredientRequest, CreateRecipeRequest, CreateStepRequest, CreatedIngredient,
    CreatedRecipe, CreatedStep, Ingredient, Recipe, Step, UpdateIngredientRequest,
    UpdateRecipeRequest, UpdateStepRequest,
};
use cookbook_core::photo;

use crate::ApiClient;

/// Transport the detail workflow runs against. `ApiClient` is the
/// production implementation; tests script their own.
#[async_trait]
pub trait RecipeTransport: Send + Sync {
    async fn fetch_recipe(&self, id: i64) -> Result<Recipe>;
    async fn fetch_ingredients(&self, recipe_id: i64) -> Result<Vec<Ingredient>>;
    async fn fetch_steps(&self, recipe_id: i64) -> Result<Vec<Step>>;
    async fn create_recipe(&self, request: &CreateRecipeRequest) -> Result<CreatedRecipe>;
    async fn update_recipe(&self, id: i64, request: &UpdateRecipeRequest) -> Result<()>;
    async fn delete_recipe(&self, id: i64) -> Result<()>;
    async fn create_ingredient(
        &self,
        request: &CreateIngredientRequest,
    ) -> Result<CreatedIngredient>;
    async fn update_ingredient(&self, id: i64, request: &UpdateIngredientRequest) -> Result<()>;
    async fn delete_ingredient(&self, id: i64) -> Result<()>;
    async fn create_step(&self, request: &CreateStepRequest) -> Result<CreatedStep>;
    async fn update_step(&self, id: i64, request: &UpdateStepRequest) -> Result<()>;
    async fn delete_step(&self, id: i64) -> Result<()>;
}

#[async_trait]
impl RecipeTransport for ApiClient {
    async fn fetch_recipe(&self, id: i64) -> Result<Recipe> {
        self.get_recipe(id).await
    }

    async fn fetch_ingredients(&self, recipe_id: i64) -> Result<Vec<Ingredient>> {
        self.list_recipe_ingredients(recipe_id).await
    }

    async fn fetch_steps(&self, recipe_id: i64) -> Result<Vec<Step>> {
        self.list_recipe_steps(recipe_id).await
    }

    async fn create_recipe(&self, request: &CreateRecipeRequest) -> Result<CreatedRecipe> {
        ApiClient::create_recipe(self, request).await
    }

    async fn update_recipe(&self, id: i64, request: &UpdateRecipeRequest) -> Result<()> {
        ApiClient::update_recipe(self, id, request).await?;
        Ok(())
    }

    async fn delete_recipe(&self, id: i64) -> Result<()> {
        ApiClient::delete_recipe(self, id).await
    }

    async fn create_ingredient(
        &self,
        request: &CreateIngredientRequest,
    ) -> Result<CreatedIngredient> {
        ApiClient::create_ingredient(self, request).await
    }

    async fn update_ingredient(&self, id: i64, request: &UpdateIngredientRequest) -> Result<()> {
        ApiClient::update_ingredient(self, id, request).await?;
        Ok(())
    }

    async fn delete_ingredient(&self, id: i64) -> Result<()> {
        ApiClient::delete_ingredient(self, id).await
    }

    async fn create_step(&self, request: &CreateStepRequest) -> Result<CreatedStep> {
        ApiClient::create_step(self, request).await
    }

    async fn update_step(&self, id: i64, request: &UpdateStepRequest) -> Result<()> {
        ApiClient::update_step(self, id, request).await?;
        Ok(())
    }

    async fn delete_step(&self, id: i64) -> Result<()> {
        ApiClient::delete_step(self, id).await
    }
}

/// A recipe together with its ingredients and steps.
#[derive(Debug, Clone)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
}

/// Load a full recipe view.
///
/// The three fetches run strictly in sequence; the first failure aborts the
/// remainder and reports which stage failed.
pub async fn load_recipe_detail(
    transport: &impl RecipeTransport,
    id: i64,
) -> Result<RecipeDetail> {
    let recipe = transport
        .fetch_recipe(id)
        .await
        .context("Failed to load recipe details.")?;
    let ingredients = transport
        .fetch_ingredients(id)
        .await
        .context("Failed to load ingredients.")?;
    let steps = transport
        .fetch_steps(id)
        .await
        .context("Failed to load steps.")?;

    Ok(RecipeDetail {
        recipe,
        ingredients,
        steps,
    })
}

/// Where the detail view is in its load cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    LoadError(String),
}

/// Whether the loaded view is displaying, collecting edits, or waiting on a
/// save round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Viewing,
    Editing,
    Saving,
}

/// Drives the recipe detail workflow against a transport.
///
/// The title and serving size are plain fields the caller edits directly;
/// everything else changes only through methods, and only after the server
/// has confirmed the operation. A new (unsaved) recipe starts in edit mode
/// and refuses child additions until it has been persisted and an id issued.
pub struct RecipeEditor<T> {
    transport: T,
    recipe_id: Option<i64>,
    pub title: String,
    pub serving_size: String,
    photos: Option<String>,
    ingredients: Vec<Ingredient>,
    steps: Vec<Step>,
    load_state: LoadState,
    mode: EditMode,
    error: Option<String>,
}

impl<T: RecipeTransport> RecipeEditor<T> {
    /// Editor for a recipe that does not exist yet.
    pub fn for_new(transport: T) -> Self {
        RecipeEditor {
            transport,
            recipe_id: None,
            title: String::new(),
            serving_size: String::new(),
            photos: None,
            ingredients: Vec::new(),
            steps: Vec::new(),
            load_state: LoadState::Loaded,
            mode: EditMode::Editing,
            error: None,
        }
    }

    /// Editor over an existing recipe. Fetches the full detail view before
    /// returning; a failed stage leaves the editor in `LoadError`.
    pub async fn load(transport: T, id: i64) -> Self {
        let mut editor = RecipeEditor {
            transport,
            recipe_id: Some(id),
            title: String::new(),
            serving_size: String::new(),
            photos: None,
            ingredients: Vec::new(),
            steps: Vec::new(),
            load_state: LoadState::Loading,
            mode: EditMode::Viewing,
            error: None,
        };

        match load_recipe_detail(&editor.transport, id).await {
            Ok(detail) => {
                editor.title = detail.recipe.title;
                editor.serving_size = detail.recipe.serving_size;
                editor.photos = detail.recipe.photos;
                editor.ingredients = detail.ingredients;
                editor.steps = detail.steps;
                editor.load_state = LoadState::Loaded;
            }
            Err(err) => {
                editor.load_state = LoadState::LoadError(err.to_string());
            }
        }

        editor
    }

    pub fn begin_editing(&mut self) {
        if self.mode == EditMode::Viewing {
            self.mode = EditMode::Editing;
        }
    }

    /// Persist the recipe form. Creates on first save, replaces afterwards.
    ///
    /// On success the editor returns to viewing; on failure it stays in edit
    /// mode with a retriable inline error.
    pub async fn save(&mut self) {
        if self.title.trim().is_empty() || self.serving_size.trim().is_empty() {
            self.error = Some("Please fill in all required fields.".to_string());
            return;
        }

        self.mode = EditMode::Saving;
        self.error = None;

        match self.recipe_id {
            Some(id) => {
                let request = UpdateRecipeRequest {
                    title: self.title.clone(),
                    serving_size: self.serving_size.clone(),
                    photos: self.photos.clone(),
                };
                match self.transport.update_recipe(id, &request).await {
                    Ok(()) => self.mode = EditMode::Viewing,
                    Err(_) => {
                        self.error = Some("Failed to update recipe.".to_string());
                        self.mode = EditMode::Editing;
                    }
                }
            }
            None => {
                let request = CreateRecipeRequest {
                    title: self.title.clone(),
                    serving_size: self.serving_size.clone(),
                    photos: self.photos.clone(),
                };
                match self.transport.create_recipe(&request).await {
                    Ok(created) => {
                        self.recipe_id = Some(created.id);
                        self.title = created.title;
                        self.serving_size = created.serving_size;
                        self.mode = EditMode::Viewing;
                    }
                    Err(_) => {
                        self.error = Some("Failed to create recipe.".to_string());
                        self.mode = EditMode::Editing;
                    }
                }
            }
        }
    }

    /// Delete the recipe. Children are handled per the server's cascade
    /// policy; on success the editor reverts to the unsaved state.
    pub async fn delete_recipe(&mut self) {
        let Some(id) = self.recipe_id else {
            return;
        };

        match self.transport.delete_recipe(id).await {
            Ok(()) => {
                self.error = None;
                self.recipe_id = None;
            }
            Err(_) => self.error = Some("Failed to delete recipe.".to_string()),
        }
    }

    /// Add an ingredient to the saved recipe and append the server echo.
    pub async fn add_ingredient(&mut self, name: &str, qty: Option<f64>, unit: Option<String>) {
        if name.trim().is_empty() {
            self.error = Some("Ingredient name is required.".to_string());
            return;
        }
        let Some(recipe_id) = self.recipe_id else {
            self.error =
                Some("Please save the recipe first before adding ingredients.".to_string());
            return;
        };

        let request = CreateIngredientRequest {
            ingredient: name.to_string(),
            qty,
            unit,
            recipe_id,
        };
        match self.transport.create_ingredient(&request).await {
            Ok(created) => {
                self.error = None;
                self.ingredients.push(Ingredient {
                    id: created.id,
                    ingredient: created.ingredient,
                    qty: created.qty,
                    unit: created.unit,
                    recipe_id: created.recipe_id,
                });
            }
            Err(_) => self.error = Some("Failed to add ingredient.".to_string()),
        }
    }

    /// Replace an ingredient's fields. Local state changes only after the
    /// server confirms.
    pub async fn update_ingredient(
        &mut self,
        index: usize,
        name: &str,
        qty: Option<f64>,
        unit: Option<String>,
    ) {
        if name.trim().is_empty() {
            self.error = Some("Ingredient name is required.".to_string());
            return;
        }
        let (ingredient_id, recipe_id) = match self.ingredients.get(index) {
            Some(existing) => (existing.id, existing.recipe_id),
            None => return,
        };

        let request = UpdateIngredientRequest {
            ingredient: Some(name.to_string()),
            qty,
            unit: unit.clone(),
            recipe_id,
        };
        match self.transport.update_ingredient(ingredient_id, &request).await {
            Ok(()) => {
                self.error = None;
                let item = &mut self.ingredients[index];
                item.ingredient = name.to_string();
                item.qty = qty;
                item.unit = unit;
            }
            Err(_) => self.error = Some("Failed to update ingredient.".to_string()),
        }
    }

    /// Remove an ingredient. The list shrinks only after the server confirms.
    pub async fn delete_ingredient(&mut self, index: usize) {
        let Some(ingredient_id) = self.ingredients.get(index).map(|i| i.id) else {
            return;
        };

        match self.transport.delete_ingredient(ingredient_id).await {
            Ok(()) => {
                self.error = None;
                self.ingredients.remove(index);
            }
            Err(_) => self.error = Some("Failed to delete ingredient.".to_string()),
        }
    }

    /// Add a step to the saved recipe and append the server echo. New step
    /// drafts carry no photo.
    pub async fn add_step(&mut self, text: &str, duration: Option<String>) {
        if text.trim().is_empty() {
            self.error = Some("Step description is required.".to_string());
            return;
        }
        let Some(recipe_id) = self.recipe_id else {
            self.error = Some("Please save the recipe first before adding steps.".to_string());
            return;
        };

        let request = CreateStepRequest {
            steps: text.to_string(),
            duration,
            recipe_id,
            photos: None,
        };
        match self.transport.create_step(&request).await {
            Ok(created) => {
                self.error = None;
                self.steps.push(Step {
                    id: created.id,
                    steps: created.steps,
                    duration: created.duration,
                    recipe_id: created.recipe_id,
                    photos: None,
                });
            }
            Err(_) => self.error = Some("Failed to add step.".to_string()),
        }
    }

    /// Replace a step's text and duration. The stored photo rides along
    /// unchanged; an absent photo would clear it server-side.
    pub async fn update_step(&mut self, index: usize, text: &str, duration: Option<String>) {
        if text.trim().is_empty() {
            self.error = Some("Step description is required.".to_string());
            return;
        }
        let (step_id, recipe_id, photos) = match self.steps.get(index) {
            Some(existing) => (existing.id, existing.recipe_id, existing.photos.clone()),
            None => return,
        };

        let request = UpdateStepRequest {
            steps: Some(text.to_string()),
            duration: duration.clone(),
            recipe_id,
            photos,
        };
        match self.transport.update_step(step_id, &request).await {
            Ok(()) => {
                self.error = None;
                let item = &mut self.steps[index];
                item.steps = text.to_string();
                item.duration = duration;
            }
            Err(_) => self.error = Some("Failed to update step.".to_string()),
        }
    }

    /// Remove a step. The list shrinks only after the server confirms.
    pub async fn delete_step(&mut self, index: usize) {
        let Some(step_id) = self.steps.get(index).map(|s| s.id) else {
            return;
        };

        match self.transport.delete_step(step_id).await {
            Ok(()) => {
                self.error = None;
                self.steps.remove(index);
            }
            Err(_) => self.error = Some("Failed to delete step.".to_string()),
        }
    }

    /// Accept a photo as the browser produced it and keep the canonical form.
    pub fn set_photo(&mut self, data_url: &str) {
        match photo::to_canonical(Some(data_url)) {
            Ok(canonical) => {
                self.photos = canonical.filter(|p| !p.is_empty());
            }
            Err(_) => {
                self.error = Some("Selected image is not a valid data URI.".to_string());
            }
        }
    }

    /// Photo in display form, ready for an image src binding.
    pub fn display_photo(&self) -> String {
        photo::to_display(self.photos.as_deref())
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn recipe_id(&self) -> Option<i64> {
        self.recipe_id
    }

    pub fn photos(&self) -> Option<&str> {
        self.photos.as_deref()
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}
