//! The five 5S sections and the rating buckets derived from audit averages.
//!
//! Section order is fixed and semantic: score position 0 is always Seiri,
//! position 4 is always Shitsuke. All enums use `snake_case` serialization
//! via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of 5S sections. Scores, notes, and section averages are all
/// fixed-size arrays of this length.
pub const SECTION_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// One of the five 5S sections, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Seiri,
    Seiton,
    Seiso,
    Seiketsu,
    Shitsuke,
}

impl Section {
    /// All sections in score-array order.
    pub const ALL: [Self; SECTION_COUNT] = [
        Self::Seiri,
        Self::Seiton,
        Self::Seiso,
        Self::Seiketsu,
        Self::Shitsuke,
    ];

    /// Return the string representation used in SQL storage and CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seiri => "seiri",
            Self::Seiton => "seiton",
            Self::Seiso => "seiso",
            Self::Seiketsu => "seiketsu",
            Self::Shitsuke => "shitsuke",
        }
    }

    /// Human-readable label for reports and tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Seiri => "Seiri",
            Self::Seiton => "Seiton",
            Self::Seiso => "Seiso",
            Self::Seiketsu => "Seiketsu",
            Self::Shitsuke => "Shitsuke",
        }
    }

    /// Position of this section in the score array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Seiri => 0,
            Self::Seiton => 1,
            Self::Seiso => 2,
            Self::Seiketsu => 3,
            Self::Shitsuke => 4,
        }
    }

    /// Parse a section name as used in CLI flags (`seiri`, `seiton`, ...).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// Distribution bucket for an audit average.
///
/// Boundaries are half-open so every average lands in exactly one bucket:
///
/// ```text
/// excellent  [4.5, ..)
/// good       [3.5, 4.5)
/// regular    [2.5, 3.5)
/// deficient  (.., 2.5)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    Good,
    Regular,
    Deficient,
}

impl Rating {
    /// Threshold above which an audit counts as excellent.
    pub const EXCELLENT_THRESHOLD: f64 = 4.5;

    /// Classify an average into its bucket. Total over all inputs.
    #[must_use]
    pub fn for_average(average: f64) -> Self {
        if average >= Self::EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if average >= 3.5 {
            Self::Good
        } else if average >= 2.5 {
            Self::Regular
        } else {
            Self::Deficient
        }
    }

    /// Return the string representation used in CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Regular => "regular",
            Self::Deficient => "deficient",
        }
    }

    /// Human-readable label for reports and tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Regular => "Regular",
            Self::Deficient => "Deficient",
        }
    }

    /// Parse a rating name as used in CLI flags.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        [Self::Excellent, Self::Good, Self::Regular, Self::Deficient]
            .into_iter()
            .find(|rating| rating.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{Rating, SECTION_COUNT, Section};

    #[test]
    fn section_order_matches_indices() {
        for (position, section) in Section::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), position);
        }
        assert_eq!(Section::ALL.len(), SECTION_COUNT);
    }

    #[test]
    fn section_parse_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.as_str()), Some(section));
        }
        assert_eq!(Section::parse("SEISO"), Some(Section::Seiso));
        assert_eq!(Section::parse("kaizen"), None);
    }

    #[rstest]
    #[case(5.0, Rating::Excellent)]
    #[case(4.5, Rating::Excellent)]
    #[case(4.49, Rating::Good)]
    #[case(3.5, Rating::Good)]
    #[case(3.49, Rating::Regular)]
    #[case(2.5, Rating::Regular)]
    #[case(2.49, Rating::Deficient)]
    #[case(1.0, Rating::Deficient)]
    fn rating_boundaries_are_half_open(#[case] average: f64, #[case] expected: Rating) {
        assert_eq!(Rating::for_average(average), expected);
    }

    #[test]
    fn rating_serializes_snake_case() {
        let json = serde_json::to_string(&Rating::Excellent).unwrap();
        assert_eq!(json, "\"excellent\"");
    }
}
