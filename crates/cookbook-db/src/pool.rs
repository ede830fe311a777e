//! Connection pool setup and schema migrations

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Open the shared connection pool.
///
/// The pool bounds concurrent in-flight statements; callers waiting for a
/// free connection are cut off after `acquire_timeout` instead of queueing
/// forever. Missing database files are created on first connect. Idle
/// connections are never reaped: closing the last connection of an
/// in-memory database would discard its contents.
pub async fn connect_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<SqlitePool> {
    let options = database_url
        .parse::<SqliteConnectOptions>()
        .context("DATABASE_URL is not a valid SQLite connection string")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Run pending migrations (path: workspace migrations/ from crate root)
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations");
    let migrator = sqlx::migrate::Migrator::new(migrations_dir)
        .await
        .context("Failed to load migrations")?;
    migrator
        .run(pool)
        .await
        .context("Failed to run database migrations")?;
    Ok(())
}
