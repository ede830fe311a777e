use cookbook_core::{
    models::{Recipe, RecipeRow},
    AppError,
};
use sqlx::{Sqlite, SqlitePool};

/// Repository for managing recipes
#[derive(Clone)]
pub struct RecipeRepository {
    pool: SqlitePool,
}

impl RecipeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all recipes
    #[tracing::instrument(skip(self), fields(db.table = "Recipes", db.operation = "select"))]
    pub async fn list_all(&self) -> Result<Vec<Recipe>, AppError> {
        let rows = sqlx::query_as::<Sqlite, RecipeRow>(
            "SELECT Id, Title, ServingSize, Photos FROM Recipes ORDER BY Id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    /// Get recipe by ID
    #[tracing::instrument(skip(self), fields(db.table = "Recipes", db.operation = "select", db.record_id = %id))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Recipe>, AppError> {
        let row = sqlx::query_as::<Sqlite, RecipeRow>(
            "SELECT Id, Title, ServingSize, Photos FROM Recipes WHERE Id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Recipe::from))
    }

    /// Insert a recipe and return its store-assigned id
    #[tracing::instrument(skip(self, photos), fields(db.table = "Recipes", db.operation = "insert"))]
    pub async fn create(
        &self,
        title: &str,
        serving_size: &str,
        photos: Option<&str>,
    ) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO Recipes (Title, ServingSize, Photos) VALUES (?, ?, ?)")
            .bind(title)
            .bind(serving_size)
            .bind(photos)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replace a recipe's fields; false means no such row
    #[tracing::instrument(skip(self, photos), fields(db.table = "Recipes", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: i64,
        title: &str,
        serving_size: &str,
        photos: Option<&str>,
    ) -> Result<bool, AppError> {
        let rows_affected =
            sqlx::query("UPDATE Recipes SET Title = ?, ServingSize = ?, Photos = ? WHERE Id = ?")
                .bind(title)
                .bind(serving_size)
                .bind(photos)
                .bind(id)
                .execute(&self.pool)
                .await?
                .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Delete a recipe; false means no such row. Ingredients and steps are
    /// untouched here, cascade behavior belongs to the service layer.
    #[tracing::instrument(skip(self), fields(db.table = "Recipes", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM Recipes WHERE Id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
