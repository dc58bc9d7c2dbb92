use thiserror::Error;
use tracing::error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by the PostgreSQL access layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The connection pool could not be created against the configured store.
    #[error("database unavailable: {source}")]
    Connection {
        #[source]
        source: sqlx::Error,
    },
    /// A statement was rejected or failed during execution.
    #[error("query failed: {statement}")]
    Query {
        statement: String,
        #[source]
        source: sqlx::Error,
    },
    /// Caller supplied update field and value lists of different lengths.
    /// This is a programmer error, not a runtime condition.
    #[error(
        "update fields and values must be of equal length (got {fields} fields, {values} values)"
    )]
    FieldValueMismatch { fields: usize, values: usize },
}

impl StorageError {
    /// Wrap a failed statement, logging it so the offending SQL can be
    /// diagnosed from the server logs.
    pub(crate) fn query(statement: &str, source: sqlx::Error) -> Self {
        error!(statement, error = %source, "query failed");
        StorageError::Query {
            statement: statement.to_owned(),
            source,
        }
    }
}
