//! Store handle holding the database and hosting the repository methods.
//!
//! `AuditStore` is explicitly constructed and injected into whatever layer
//! performs persistence (the server, the CLI context). There is no shared
//! global connection; the pure aggregator in `gemba-core` never sees this
//! type.

use crate::AuditDb;
use crate::error::DatabaseError;

/// Store handle for all audit persistence operations.
///
/// Repo methods are implemented as `impl AuditStore` in [`crate::repos`].
pub struct AuditStore {
    db: AuditDb,
}

impl AuditStore {
    /// Create a store backed by a local database file.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for
    ///   tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = AuditDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `AuditDb` (for testing).
    #[must_use]
    pub const fn from_db(db: AuditDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &AuditDb {
        &self.db
    }
}
