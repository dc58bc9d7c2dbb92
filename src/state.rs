//! Shared application state owning the connection pool.

use std::sync::Arc;

use sqlx::PgPool;

/// Shared handle to [`AppState`].
pub type SharedState = Arc<AppState>;

/// Central application state. The pool is the only shared resource; its
/// concurrency safety is delegated to sqlx.
pub struct AppState {
    pool: PgPool,
}

impl AppState {
    /// Wrap the connected pool so it can be shared cheaply across handlers.
    pub fn new(pool: PgPool) -> SharedState {
        Arc::new(Self { pool })
    }

    /// Connection pool handle.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    /// Intended for shutdown and test teardown.
    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}
