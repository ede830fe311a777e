use cookbook_core::models::{CreateStepRequest, CreatedStep, Step, UpdateStepRequest};
use cookbook_core::AppError;
use cookbook_db::StepRepository;
use validator::Validate;

use super::{blank_to_null, normalize_photo};

/// Preparation step CRUD. Step photos go through the same canonicalization
/// as recipe photos.
#[derive(Clone)]
pub struct StepService {
    repository: StepRepository,
}

impl StepService {
    pub fn new(repository: StepRepository) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Step>, AppError> {
        self.repository.list_all().await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Step, AppError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Step not found".to_string()))
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_by_recipe(&self, recipe_id: i64) -> Result<Vec<Step>, AppError> {
        self.repository.list_by_recipe(recipe_id).await
    }

    /// Create a step and echo the accepted fields with the new id. The photo
    /// is persisted but not echoed.
    #[tracing::instrument(skip(self, request))]
    pub async fn create(&self, request: CreateStepRequest) -> Result<CreatedStep, AppError> {
        request.validate()?;
        let photos = normalize_photo(request.photos.as_deref())?;
        let duration = blank_to_null(request.duration);
        let id = self
            .repository
            .create(
                &request.steps,
                duration.as_deref(),
                request.recipe_id,
                photos.as_deref(),
            )
            .await?;
        Ok(CreatedStep {
            id,
            steps: request.steps,
            duration,
            recipe_id: request.recipe_id,
        })
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdateStepRequest) -> Result<(), AppError> {
        request.validate()?;
        let photos = normalize_photo(request.photos.as_deref())?;
        let duration = blank_to_null(request.duration);
        let updated = self
            .repository
            .update(
                id,
                request.steps.as_deref(),
                duration.as_deref(),
                request.recipe_id,
                photos.as_deref(),
            )
            .await?;
        if updated {
            Ok(())
        } else {
            Err(AppError::NotFound("Step not found".to_string()))
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            Ok(())
        } else {
            Err(AppError::NotFound("Step not found".to_string()))
        }
    }
}
