use cookbook_core::{models::Ingredient, AppError};
use sqlx::{Sqlite, SqlitePool};

/// Repository for managing ingredients
#[derive(Clone)]
pub struct IngredientRepository {
    pool: SqlitePool,
}

impl IngredientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all ingredients
    #[tracing::instrument(skip(self), fields(db.table = "Ingredients", db.operation = "select"))]
    pub async fn list_all(&self) -> Result<Vec<Ingredient>, AppError> {
        let ingredients = sqlx::query_as::<Sqlite, Ingredient>(
            "SELECT Id, Ingredient, Qty, Unit, RecipeId FROM Ingredients ORDER BY Id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(ingredients)
    }

    /// Get ingredient by ID
    #[tracing::instrument(skip(self), fields(db.table = "Ingredients", db.operation = "select", db.record_id = %id))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Ingredient>, AppError> {
        let ingredient = sqlx::query_as::<Sqlite, Ingredient>(
            "SELECT Id, Ingredient, Qty, Unit, RecipeId FROM Ingredients WHERE Id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ingredient)
    }

    /// List the ingredients referencing a recipe
    #[tracing::instrument(skip(self), fields(db.table = "Ingredients", db.operation = "select"))]
    pub async fn list_by_recipe(&self, recipe_id: i64) -> Result<Vec<Ingredient>, AppError> {
        let ingredients = sqlx::query_as::<Sqlite, Ingredient>(
            "SELECT Id, Ingredient, Qty, Unit, RecipeId FROM Ingredients WHERE RecipeId = ? ORDER BY Id ASC",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ingredients)
    }

    /// Insert an ingredient and return its store-assigned id
    #[tracing::instrument(skip(self), fields(db.table = "Ingredients", db.operation = "insert"))]
    pub async fn create(
        &self,
        ingredient: &str,
        qty: Option<f64>,
        unit: Option<&str>,
        recipe_id: i64,
    ) -> Result<i64, AppError> {
        let result = sqlx::query(
            "INSERT INTO Ingredients (Ingredient, Qty, Unit, RecipeId) VALUES (?, ?, ?, ?)",
        )
        .bind(ingredient)
        .bind(qty)
        .bind(unit)
        .bind(recipe_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replace an ingredient's fields; false means no such row
    #[tracing::instrument(skip(self), fields(db.table = "Ingredients", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: i64,
        ingredient: Option<&str>,
        qty: Option<f64>,
        unit: Option<&str>,
        recipe_id: i64,
    ) -> Result<bool, AppError> {
        let rows_affected = sqlx::query(
            "UPDATE Ingredients SET Ingredient = ?, Qty = ?, Unit = ?, RecipeId = ? WHERE Id = ?",
        )
        .bind(ingredient)
        .bind(qty)
        .bind(unit)
        .bind(recipe_id)
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Delete an ingredient; false means no such row
    #[tracing::instrument(skip(self), fields(db.table = "Ingredients", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM Ingredients WHERE Id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Count ingredients referencing a recipe
    #[tracing::instrument(skip(self), fields(db.table = "Ingredients", db.operation = "select"))]
    pub async fn count_by_recipe(&self, recipe_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Ingredients WHERE RecipeId = ?")
            .bind(recipe_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Delete every ingredient referencing a recipe; returns rows removed
    #[tracing::instrument(skip(self), fields(db.table = "Ingredients", db.operation = "delete"))]
    pub async fn delete_by_recipe(&self, recipe_id: i64) -> Result<u64, AppError> {
        let rows_affected = sqlx::query("DELETE FROM Ingredients WHERE RecipeId = ?")
            .bind(recipe_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
