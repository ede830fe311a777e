//! Configuration module
//!
//! This module provides the runtime configuration for the API, loaded from
//! environment variables with development-friendly defaults.

use std::env;

// Common constants
const SERVER_PORT: u16 = 3001;
const MAX_CONNECTIONS: u32 = 10;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const MAX_BODY_SIZE_MB: usize = 50;
const DATABASE_URL: &str = "sqlite://cookbook.db?mode=rwc";

/// What happens to a recipe's ingredients and steps when the recipe itself
/// is deleted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CascadePolicy {
    /// Delete only the recipe row and leave children in place.
    #[default]
    Orphan,
    /// Delete the recipe's ingredients and steps along with it.
    Cascade,
    /// Refuse to delete a recipe that still has ingredients or steps.
    Reject,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub max_body_size_bytes: usize,
    pub cascade_policy: CascadePolicy,
    pub environment: String,
}

impl Config {
    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase().eq("production") || self.environment.to_lowercase().eq("prod")
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let max_body_size_mb = env::var("MAX_BODY_SIZE_MB")
            .unwrap_or_else(|_| MAX_BODY_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_BODY_SIZE_MB);

        let cascade_policy = env::var("CASCADE_POLICY")
            .ok()
            .and_then(|s| match s.to_lowercase().as_str() {
                "orphan" => Some(CascadePolicy::Orphan),
                "cascade" => Some(CascadePolicy::Cascade),
                "reject" => Some(CascadePolicy::Reject),
                _ => None,
            })
            .unwrap_or_default();

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| DATABASE_URL.to_string()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            max_body_size_bytes: max_body_size_mb * 1024 * 1024,
            cascade_policy,
            environment,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !self.database_url.starts_with("sqlite:") {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a valid SQLite connection string"
            ));
        }

        if self.db_max_connections == 0 {
            return Err(anyhow::anyhow!("DB_MAX_CONNECTIONS must be at least 1"));
        }

        Ok(())
    }
}
