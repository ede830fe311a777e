//! HTTP handlers, one module per entity.
//!
//! Handlers stay thin: extract, delegate to the service, shape the response.
//! Anything that can fail surfaces as `HttpAppError` so every endpoint
//! renders errors the same way.

pub mod ingredients;
pub mod recipes;
pub mod steps;
