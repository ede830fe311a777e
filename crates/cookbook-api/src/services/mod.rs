//! Resource services
//!
//! One service per entity, sitting between the HTTP handlers and the
//! repositories. Services validate request DTOs, normalize photo payloads to
//! canonical form, and map row outcomes onto the error taxonomy. They hold no
//! state beyond repository handles, so cloning is cheap.

mod ingredients;
mod recipes;
mod steps;

pub use ingredients::IngredientService;
pub use recipes::RecipeService;
pub use steps::StepService;

use cookbook_core::{photo, AppError};

/// Canonicalize an inbound photo payload and collapse empty text to NULL.
pub(crate) fn normalize_photo(input: Option<&str>) -> Result<Option<String>, AppError> {
    let canonical = photo::to_canonical(input)?;
    Ok(canonical.filter(|p| !p.is_empty()))
}

/// Collapse empty optional text (Unit, Duration) to NULL, matching how the
/// store has always held these columns.
pub(crate) fn blank_to_null(input: Option<String>) -> Option<String> {
    input.filter(|s| !s.is_empty())
}
