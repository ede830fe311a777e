//! Database repositories for data access layer
//!
//! Each repository owns the parameterized statements for one table and
//! returns plain models. Photo-bearing reads come back normalized to
//! canonical text regardless of the column's physical representation.

pub mod ingredients;
pub mod recipes;
pub mod steps;

pub use ingredients::IngredientRepository;
pub use recipes::RecipeRepository;
pub use steps::StepRepository;
