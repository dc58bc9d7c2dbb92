//! PostgreSQL pool bootstrap and connectivity checks.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::AppConfig;
use crate::dao::storage::{StorageError, StorageResult};

/// Create the process-wide connection pool from the loaded configuration.
///
/// The pool is created once at startup and owned by the application state;
/// handlers borrow connections from it per operation.
pub async fn connect(config: &AppConfig) -> StorageResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|source| StorageError::Connection { source })
}

/// Round-trip a trivial statement to confirm the store is reachable.
pub async fn ping(pool: &PgPool) -> StorageResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|source| StorageError::query("SELECT 1", source))
}
