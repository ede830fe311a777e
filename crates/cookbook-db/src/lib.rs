//! Cookbook Database Layer
//!
//! SQLite connection pool setup, schema migrations, and the per-entity
//! repositories that execute parameterized statements against the store.

pub mod db;
pub mod pool;

pub use db::{IngredientRepository, RecipeRepository, StepRepository};
pub use pool::{connect_pool, run_migrations};
