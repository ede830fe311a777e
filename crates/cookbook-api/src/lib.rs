//! Cookbook API Library
//!
//! This crate provides the HTTP handlers, the per-entity resource services,
//! and the application setup.

// Module declarations
mod api_doc;
mod handlers;
mod telemetry;

// Public modules
pub mod error;
pub mod services;
pub mod setup;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
