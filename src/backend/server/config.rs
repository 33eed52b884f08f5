/**
 * Database Loading
 *
 * Opens the SQLite pool named by the configuration and brings the schema
 * up to date with the embedded migrations.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::shared::AppConfig;

/// Open the configured database and run migrations
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, BackendError> {
    connect(&config.database_url).await
}

/// Open `database_url` and run migrations
///
/// In-memory URLs get a single connection that is never recycled: every
/// SQLite connection to `:memory:` is its own database, so a second
/// connection would see an empty schema.
pub async fn connect(database_url: &str) -> Result<SqlitePool, BackendError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        e
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
