use cookbook_core::{
    models::{Step, StepRow},
    AppError,
};
use sqlx::{Sqlite, SqlitePool};

/// Repository for managing preparation steps
#[derive(Clone)]
pub struct StepRepository {
    pool: SqlitePool,
}

impl StepRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all steps
    #[tracing::instrument(skip(self), fields(db.table = "Steps", db.operation = "select"))]
    pub async fn list_all(&self) -> Result<Vec<Step>, AppError> {
        let rows = sqlx::query_as::<Sqlite, StepRow>(
            "SELECT Id, Steps, Duration, RecipeId, Photos FROM Steps ORDER BY Id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Step::from).collect())
    }

    /// Get step by ID
    #[tracing::instrument(skip(self), fields(db.table = "Steps", db.operation = "select", db.record_id = %id))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Step>, AppError> {
        let row = sqlx::query_as::<Sqlite, StepRow>(
            "SELECT Id, Steps, Duration, RecipeId, Photos FROM Steps WHERE Id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Step::from))
    }

    /// List the steps referencing a recipe
    #[tracing::instrument(skip(self), fields(db.table = "Steps", db.operation = "select"))]
    pub async fn list_by_recipe(&self, recipe_id: i64) -> Result<Vec<Step>, AppError> {
        let rows = sqlx::query_as::<Sqlite, StepRow>(
            "SELECT Id, Steps, Duration, RecipeId, Photos FROM Steps WHERE RecipeId = ? ORDER BY Id ASC",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Step::from).collect())
    }

    /// Insert a step and return its store-assigned id
    #[tracing::instrument(skip(self, photos), fields(db.table = "Steps", db.operation = "insert"))]
    pub async fn create(
        &self,
        steps: &str,
        duration: Option<&str>,
        recipe_id: i64,
        photos: Option<&str>,
    ) -> Result<i64, AppError> {
        let result =
            sqlx::query("INSERT INTO Steps (Steps, Duration, RecipeId, Photos) VALUES (?, ?, ?, ?)")
                .bind(steps)
                .bind(duration)
                .bind(recipe_id)
                .bind(photos)
                .execute(&self.pool)
                .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replace a step's fields; false means no such row
    #[tracing::instrument(skip(self, photos), fields(db.table = "Steps", db.operation = "update", db.record_id = %id))]
    pub async fn update(
        &self,
        id: i64,
        steps: Option<&str>,
        duration: Option<&str>,
        recipe_id: i64,
        photos: Option<&str>,
    ) -> Result<bool, AppError> {
        let rows_affected = sqlx::query(
            "UPDATE Steps SET Steps = ?, Duration = ?, RecipeId = ?, Photos = ? WHERE Id = ?",
        )
        .bind(steps)
        .bind(duration)
        .bind(recipe_id)
        .bind(photos)
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Delete a step; false means no such row
    #[tracing::instrument(skip(self), fields(db.table = "Steps", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM Steps WHERE Id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    /// Count steps referencing a recipe
    #[tracing::instrument(skip(self), fields(db.table = "Steps", db.operation = "select"))]
    pub async fn count_by_recipe(&self, recipe_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Steps WHERE RecipeId = ?")
            .bind(recipe_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Delete every step referencing a recipe; returns rows removed
    #[tracing::instrument(skip(self), fields(db.table = "Steps", db.operation = "delete"))]
    pub async fn delete_by_recipe(&self, recipe_id: i64) -> Result<u64, AppError> {
        let rows_affected = sqlx::query("DELETE FROM Steps WHERE RecipeId = ?")
            .bind(recipe_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
