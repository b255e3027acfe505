//! # gemba-db
//!
//! libSQL persistence for Gemba audit records.
//!
//! The document store is deliberately thin: audits are created once, listed
//! newest-first, fetched by id, and deleted by id. There is no update path.
//! All statistics happen in `gemba-core` over the fetched records; no filter
//! is pushed down to SQL beyond the list limit.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) in local-only mode.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod store;

pub use store::AuditStore;

use error::DatabaseError;
use libsql::Builder;

/// Database handle wrapping a libSQL database and connection.
///
/// Opens, migrates, and generates ids. The repository methods live on
/// [`AuditStore`].
pub struct AuditDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl AuditDb {
    /// Open a local-only database at the given path (`:memory:` for tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let audit_db = Self { db, conn };
        audit_db.run_migrations().await?;
        Ok(audit_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"aud-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the
    /// prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> AuditDb {
        AuditDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'audits'",
                (),
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn open_local_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audits.db");
        let path = path.to_str().unwrap();

        drop(AuditDb::open_local(path).await.unwrap());
        // Reopening reruns migrations; IF NOT EXISTS makes that a no-op.
        drop(AuditDb::open_local(path).await.unwrap());
    }

    #[tokio::test]
    async fn generated_ids_are_prefixed_and_unique() {
        let db = test_db().await;
        let first = db.generate_id("aud").await.unwrap();
        let second = db.generate_id("aud").await.unwrap();

        assert!(first.starts_with("aud-"));
        assert_eq!(first.len(), "aud-".len() + 8);
        assert_ne!(first, second);
    }
}
