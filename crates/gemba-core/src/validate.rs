//! Submission validation applied uniformly at the boundary.
//!
//! The same contract runs for the CLI `submit` command and the server's POST
//! route, independent of storage. Validation collects every violation into a
//! field -> message set instead of failing on the first one, so a caller can
//! render all of them at once.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::Responsible;
use crate::sections::SECTION_COUNT;

/// Lowest accepted section score.
pub const MIN_SCORE: f64 = 1.0;
/// Highest accepted section score.
pub const MAX_SCORE: f64 = 5.0;

const MAX_FIELD_LEN: usize = 100;

/// One field violation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All violations found in a submission. Serializes as a list so API clients
/// can render per-field messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for a given field, if that field failed.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid submission:")?;
        for error in &self.errors {
            write!(f, " {}: {};", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a submission's scores and responsible party.
///
/// Scores must be exactly five values, each finite and within `[1, 5]`
/// (integers or decimals). The responsible rules mirror the intake form:
/// `nombre` and `cargo` are mandatory with minimum trimmed lengths, the
/// optional fields are checked only when present.
///
/// # Errors
///
/// Returns the full set of field violations; never fails on the first one.
pub fn validate_submission(
    scores: &[f64],
    responsible: &Responsible,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if scores.len() == SECTION_COUNT {
        for (position, score) in scores.iter().enumerate() {
            if !score.is_finite() || *score < MIN_SCORE || *score > MAX_SCORE {
                errors.push(
                    &format!("scores[{position}]"),
                    format!("score must be between {MIN_SCORE} and {MAX_SCORE}"),
                );
            }
        }
    } else {
        errors.push(
            "scores",
            format!("exactly {SECTION_COUNT} scores are required, got {}", scores.len()),
        );
    }

    validate_responsible(responsible, &mut errors);

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn validate_responsible(responsible: &Responsible, errors: &mut ValidationErrors) {
    required_min_len(errors, "responsable.nombre", &responsible.name, 2);
    required_min_len(errors, "responsable.cargo", &responsible.role, 3);
    optional_min_len(errors, "responsable.apellido", responsible.surname.as_deref(), 2);
    optional_min_len(errors, "responsable.area", responsible.area.as_deref(), 3);

    if let Some(document) = responsible.document.as_deref() {
        let trimmed = document.trim();
        if !trimmed.is_empty()
            && !(trimmed.len() >= 7
                && trimmed.len() <= 12
                && trimmed.chars().all(|ch| ch.is_ascii_digit()))
        {
            errors.push("responsable.documento", "document must be 7 to 12 digits");
        }
    }

    if let Some(email) = responsible.email.as_deref()
        && !email.trim().is_empty()
        && !is_valid_email(email.trim())
    {
        errors.push("responsable.email", "invalid email format");
    }
}

fn required_min_len(errors: &mut ValidationErrors, field: &str, value: &str, min: usize) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, "required");
    } else if trimmed.chars().count() < min {
        errors.push(field, format!("must be at least {min} characters"));
    } else if trimmed.chars().count() > MAX_FIELD_LEN {
        errors.push(field, format!("must not exceed {MAX_FIELD_LEN} characters"));
    }
}

fn optional_min_len(errors: &mut ValidationErrors, field: &str, value: Option<&str>, min: usize) {
    let Some(value) = value else { return };
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() < min {
        errors.push(field, format!("must be at least {min} characters"));
    } else if trimmed.chars().count() > MAX_FIELD_LEN {
        errors.push(field, format!("must not exceed {MAX_FIELD_LEN} characters"));
    }
}

/// Minimal email shape check: one `@`, non-empty local part, a dot somewhere
/// in the domain, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_FIELD_LEN || email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
