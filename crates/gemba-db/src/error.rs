//! Database error types for gemba-db.

use thiserror::Error;

use gemba_core::validate::ValidationErrors;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// The requested audit does not exist.
    #[error("Audit not found: {id}")]
    NotFound { id: String },

    /// A submission failed field validation before touching the database.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
