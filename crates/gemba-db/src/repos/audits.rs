//! Audit repository — create, list newest-first, get, delete, count.

use chrono::Utc;

use gemba_core::entities::{Audit, Notes, Responsible, Scores, mean_of};
use gemba_core::stats::round2;
use gemba_core::wire::CreateAuditRequest;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_json_column};
use crate::store::AuditStore;

/// ID prefix for audit records.
pub const PREFIX_AUDIT: &str = "aud";

const SELECT_COLUMNS: &str = "id, scores, notes, responsable, average, created_at, updated_at";

fn row_to_audit(row: &libsql::Row) -> Result<Audit, DatabaseError> {
    let scores: Scores = parse_json_column(&row.get::<String>(1)?, "scores")?;
    let notes: Notes = parse_json_column(&row.get::<String>(2)?, "notes")?;
    let responsible: Responsible = parse_json_column(&row.get::<String>(3)?, "responsable")?;
    Ok(Audit {
        id: row.get::<String>(0)?,
        scores,
        notes,
        responsible,
        average: row.get::<f64>(4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl AuditStore {
    /// Validate a submission and persist it as a new audit record.
    ///
    /// The stored `average` is always recomputed here from the validated
    /// scores; this is the single place the derived value is produced, so
    /// `average == round2(mean(scores))` holds for every persisted record.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` with the full field error set if
    /// the submission is invalid, or a database error if the insert fails.
    pub async fn create_audit(
        &self,
        request: &CreateAuditRequest,
    ) -> Result<Audit, DatabaseError> {
        let (scores, notes) = request.validated_parts()?;
        let average = round2(mean_of(&scores));
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_AUDIT).await?;

        let scores_json = serde_json::to_string(&scores).map_err(to_other)?;
        let notes_json = serde_json::to_string(&notes).map_err(to_other)?;
        let responsible_json = serde_json::to_string(&request.responsible).map_err(to_other)?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO audits (id, scores, notes, responsable, nombre, average, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    id.as_str(),
                    scores_json,
                    notes_json,
                    responsible_json,
                    request.responsible.name.as_str(),
                    average,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        tracing::info!(audit_id = %id, average, "audit created");

        Ok(Audit {
            id,
            scores,
            notes,
            responsible: request.responsible.clone(),
            average,
            created_at: now,
            updated_at: now,
        })
    }

    /// List audits ordered by `created_at` descending (newest first).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be parsed.
    pub async fn list_audits(&self, limit: Option<u32>) -> Result<Vec<Audit>, DatabaseError> {
        let mut rows = match limit {
            Some(limit) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLUMNS} FROM audits ORDER BY created_at DESC LIMIT ?1"
                        ),
                        [i64::from(limit)],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!("SELECT {SELECT_COLUMNS} FROM audits ORDER BY created_at DESC"),
                        (),
                    )
                    .await?
            }
        };

        let mut audits = Vec::new();
        while let Some(row) = rows.next().await? {
            audits.push(row_to_audit(&row)?);
        }
        Ok(audits)
    }

    /// Fetch a single audit by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no record has that id.
    pub async fn get_audit(&self, id: &str) -> Result<Audit, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLUMNS} FROM audits WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            id: id.to_string(),
        })?;
        row_to_audit(&row)
    }

    /// Delete an audit by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no record has that id.
    pub async fn delete_audit(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM audits WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound { id: id.to_string() });
        }
        tracing::info!(audit_id = %id, "audit deleted");
        Ok(())
    }

    /// Total number of stored audits.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_audits(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM audits", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::Query(format!("negative count: {e}")))
    }
}

fn to_other(e: serde_json::Error) -> DatabaseError {
    DatabaseError::Other(e.into())
}
