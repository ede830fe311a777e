//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use cookbook_core::Config;

use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_telemetry();

    tracing::info!("Configuration loaded and validated successfully");

    let pool = cookbook_db::connect_pool(
        &config.database_url,
        config.db_max_connections,
        Duration::from_secs(config.db_timeout_seconds),
    )
    .await?;

    cookbook_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!(
        max_connections = config.db_max_connections,
        "Database ready, migrations applied"
    );

    let state = Arc::new(AppState::new(config.clone(), pool));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
