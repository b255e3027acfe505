//! Wire request/response types shared by the server and the CLI.
//!
//! These define the JSON shapes of the audit API. Field names match the
//! original service (`responsable`, `createdAt`) so existing clients keep
//! working.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Notes, Responsible, Scores};
use crate::sections::SECTION_COUNT;
use crate::validate::{ValidationErrors, validate_submission};

/// Body of `POST /api/audits`.
///
/// `scores` and `notes` arrive as open-ended vectors so shape violations can
/// be reported as field errors instead of deserialization failures. A
/// client-supplied `average` is range-checked for compatibility but otherwise
/// ignored: the store recomputes it from `scores`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CreateAuditRequest {
    pub scores: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    #[serde(rename = "responsable")]
    pub responsible: Responsible,
}

impl CreateAuditRequest {
    /// Validate the request and return the fixed-size score and note arrays.
    ///
    /// # Errors
    ///
    /// Returns every field violation found: score shape/range, responsible
    /// fields, notes shape, and an out-of-range client `average`.
    pub fn validated_parts(&self) -> Result<(Scores, Notes), ValidationErrors> {
        let mut errors = match validate_submission(&self.scores, &self.responsible) {
            Ok(()) => ValidationErrors::default(),
            Err(errors) => errors,
        };

        if let Some(average) = self.average
            && !(average.is_finite() && (0.0..=5.0).contains(&average))
        {
            errors.errors.push(crate::validate::FieldError {
                field: String::from("average"),
                message: String::from("average must be a number between 0 and 5"),
            });
        }

        let notes = match self.notes.as_deref() {
            None => Some(std::array::from_fn(|_| Vec::new())),
            Some(notes) if notes.len() == SECTION_COUNT => {
                Some(std::array::from_fn(|position| notes[position].clone()))
            }
            Some(notes) => {
                errors.errors.push(crate::validate::FieldError {
                    field: String::from("notes"),
                    message: format!(
                        "exactly {SECTION_COUNT} note lists are required, got {}",
                        notes.len()
                    ),
                });
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let mut scores: Scores = [0.0; SECTION_COUNT];
        scores.copy_from_slice(&self.scores);
        // notes is always Some when no error was recorded
        Ok((scores, notes.unwrap_or_else(|| std::array::from_fn(|_| Vec::new()))))
    }
}

/// Body of a successful `DELETE /api/audits/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Error body for every non-2xx API response. `fields` is present only for
/// validation failures so clients can render per-field messages.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<ValidationErrors>,
}

impl ErrorResponse {
    #[must_use]
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: None,
        }
    }

    #[must_use]
    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            error: String::from("invalid submission"),
            fields: Some(errors),
        }
    }
}
