//! Data models for the application
//!
//! This module contains the wire-facing entity models, their database row
//! forms, and the request/response DTOs, organized by entity.

mod ingredient;
mod recipe;
mod step;

// Re-export all models for convenient imports
pub use ingredient::*;
pub use recipe::*;
pub use step::*;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation body returned by update and delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}
