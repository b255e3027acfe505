//! Row-to-entity parsing helpers.
//!
//! The repo converts `libsql::Row` (column-indexed) into typed entities.
//! These helpers isolate the parsing logic and handle the dual datetime
//! format issue (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s
/// default format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either
/// format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a JSON TEXT column into a deserializable value.
///
/// # Errors
///
/// Returns `DatabaseError::Query` naming the column if the text is not valid
/// JSON for the target type.
pub fn parse_json_column<T: serde::de::DeserializeOwned>(
    s: &str,
    column: &str,
) -> Result<T, DatabaseError> {
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid JSON in column '{column}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::{parse_datetime, parse_json_column};

    #[test]
    fn parses_rfc3339() {
        let dt = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-02-09T14:30:00+00:00");
    }

    #[test]
    fn parses_sqlite_default_format() {
        assert!(parse_datetime("2026-02-09 14:30:00").is_ok());
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(parse_datetime("not-a-date").is_err());
    }

    #[test]
    fn json_column_error_names_the_column() {
        let err = parse_json_column::<Vec<f64>>("not json", "scores").unwrap_err();
        assert!(err.to_string().contains("scores"));
    }
}
