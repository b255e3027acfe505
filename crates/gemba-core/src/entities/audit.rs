use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sections::{Rating, SECTION_COUNT};

use super::Responsible;

/// The five section scores in canonical order, each in `[1, 5]`.
pub type Scores = [f64; SECTION_COUNT];

/// Free-text notes per question within each section. May be empty.
pub type Notes = [Vec<String>; SECTION_COUNT];

/// A completed 5S audit. Immutable once created; there is no update
/// operation anywhere in the system, only create and delete.
///
/// `average` is stored redundantly for query efficiency. The store's create
/// path recomputes it from `scores`, so `average == round2(mean_of(&scores))`
/// holds for every persisted record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Audit {
    pub id: String,
    pub scores: Scores,
    #[serde(default)]
    pub notes: Notes,
    #[serde(rename = "responsable")]
    pub responsible: Responsible,
    pub average: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Audit {
    /// Distribution bucket this audit falls into.
    #[must_use]
    pub fn rating(&self) -> Rating {
        Rating::for_average(self.average)
    }
}

/// Arithmetic mean of a score slice. 0 for an empty slice.
#[must_use]
pub fn mean_of(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let len = scores.len() as f64;
    scores.iter().sum::<f64>() / len
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::mean_of;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean_of(&[]), 0.0);
    }

    #[test]
    fn mean_of_scores() {
        assert_eq!(mean_of(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
    }
}
