//! Cookbook Core Library
//!
//! This crate provides the domain models, photo codec, error types, and
//! configuration that are shared across all cookbook components.

pub mod config;
pub mod error;
pub mod models;
pub mod photo;

// Re-export commonly used types
pub use config::{CascadePolicy, Config};
pub use error::{AppError, ErrorMetadata, LogLevel};
