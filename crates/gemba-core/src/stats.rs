//! The audit aggregator: pure statistics over audit sets.
//!
//! Every function here is a pure transform of its inputs. Time-based
//! filtering takes `now` as an argument instead of reading a clock, so the
//! whole module is deterministic under test. Callers recompute on demand;
//! with record sets in the hundreds there is nothing worth caching here.
//!
//! All empty-input cases have defined zero results, never errors or NaN.

use chrono::{DateTime, Months, TimeDelta, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{Audit, mean_of};
use crate::sections::{Rating, SECTION_COUNT};

// ---------------------------------------------------------------------------
// TimeWindow
// ---------------------------------------------------------------------------

/// Time-window selector for the history views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    #[default]
    All,
    Last7Days,
    Last30Days,
    Last90Days,
    LastYear,
}

impl TimeWindow {
    /// Return the string representation used in CLI flags and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Last7Days => "7d",
            Self::Last30Days => "30d",
            Self::Last90Days => "90d",
            Self::LastYear => "1y",
        }
    }

    /// Parse a CLI window flag (`all`, `7d`, `30d`, `90d`, `1y`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "7d" => Some(Self::Last7Days),
            "30d" => Some(Self::Last30Days),
            "90d" => Some(Self::Last90Days),
            "1y" => Some(Self::LastYear),
            _ => None,
        }
    }

    /// Lower bound of the window, or `None` for all-time.
    ///
    /// The year window goes back 12 calendar months rather than a fixed 365
    /// days, matching the original dashboard's behavior.
    #[must_use]
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::All => None,
            Self::Last7Days => Some(now - TimeDelta::days(7)),
            Self::Last30Days => Some(now - TimeDelta::days(30)),
            Self::Last90Days => Some(now - TimeDelta::days(90)),
            Self::LastYear => now.checked_sub_months(Months::new(12)),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Round to two decimal places, the precision every stored and displayed
/// average uses.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Keep only records whose `created_at` falls within `[now - window, now]`.
///
/// All-time returns the input unchanged. Input order is preserved; the
/// result is not sorted.
#[must_use]
pub fn filter_by_window(records: &[Audit], window: TimeWindow, now: DateTime<Utc>) -> Vec<Audit> {
    let Some(cutoff) = window.cutoff(now) else {
        return records.to_vec();
    };
    records
        .iter()
        .filter(|audit| audit.created_at >= cutoff && audit.created_at <= now)
        .cloned()
        .collect()
}

/// Mean of each section position across all records, rounded to two
/// decimals. All zeros for an empty set.
#[must_use]
pub fn section_averages(records: &[Audit]) -> [f64; SECTION_COUNT] {
    if records.is_empty() {
        return [0.0; SECTION_COUNT];
    }
    #[allow(clippy::cast_precision_loss)]
    let total = records.len() as f64;
    std::array::from_fn(|position| {
        let sum: f64 = records.iter().map(|audit| audit.scores[position]).sum();
        round2(sum / total)
    })
}

/// Mean of each record's stored `average`, rounded to two decimals. 0 for an
/// empty set.
#[must_use]
pub fn overall_average(records: &[Audit]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    round2(mean_of(
        &records.iter().map(|audit| audit.average).collect::<Vec<_>>(),
    ))
}

/// Improvement trend: second-half mean minus first-half mean of the
/// chronologically sorted averages, rounded to two decimals.
///
/// Records are stable-sorted by `created_at` ascending (ties keep input
/// order) and split at `floor(n / 2)`. Fewer than two records yield 0, since
/// there is nothing to compare. Positive means improving, negative
/// regressing.
#[must_use]
pub fn trend(records: &[Audit]) -> f64 {
    if records.len() <= 1 {
        return 0.0;
    }
    let averages = sorted_averages(records);
    let (first, second) = averages.split_at(averages.len() / 2);
    round2(mean_of(second) - mean_of(first))
}

/// Count of records per rating bucket over a record set.
///
/// The bucket boundaries are half-open (see [`Rating::for_average`]), so
/// every record lands in exactly one bucket and the counts always sum to the
/// input length.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Distribution {
    pub excellent: usize,
    pub good: usize,
    pub regular: usize,
    pub deficient: usize,
}

impl Distribution {
    /// Sum of all bucket counts.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.excellent + self.good + self.regular + self.deficient
    }

    /// Count for a single bucket.
    #[must_use]
    pub const fn count(&self, rating: Rating) -> usize {
        match rating {
            Rating::Excellent => self.excellent,
            Rating::Good => self.good,
            Rating::Regular => self.regular,
            Rating::Deficient => self.deficient,
        }
    }
}

/// Bucket every record's `average` into the four rating bands.
#[must_use]
pub fn distribution(records: &[Audit]) -> Distribution {
    let mut counts = Distribution::default();
    for audit in records {
        match audit.rating() {
            Rating::Excellent => counts.excellent += 1,
            Rating::Good => counts.good += 1,
            Rating::Regular => counts.regular += 1,
            Rating::Deficient => counts.deficient += 1,
        }
    }
    counts
}

/// Fraction of records rated excellent. 0 for an empty set; never NaN or
/// infinite.
#[must_use]
pub fn excellent_ratio(records: &[Audit]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let excellent = records
        .iter()
        .filter(|audit| audit.rating() == Rating::Excellent)
        .count();
    #[allow(clippy::cast_precision_loss)]
    let ratio = excellent as f64 / records.len() as f64;
    ratio
}

/// Averages sorted chronologically, ties keeping input order.
fn sorted_averages(records: &[Audit]) -> Vec<f64> {
    let mut ordered: Vec<&Audit> = records.iter().collect();
    ordered.sort_by_key(|audit| audit.created_at);
    ordered.iter().map(|audit| audit.average).collect()
}

// ---------------------------------------------------------------------------
// AuditStats
// ---------------------------------------------------------------------------

/// Everything the dashboard and `gemba stats` render for one window.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AuditStats {
    pub window: TimeWindow,
    pub total: usize,
    pub section_averages: [f64; SECTION_COUNT],
    pub overall_average: f64,
    pub excellent_count: usize,
    pub excellent_ratio: f64,
    pub trend: f64,
    pub distribution: Distribution,
    /// Average of the newest audit in the window, 0 if none.
    pub last_audit_score: f64,
}

impl AuditStats {
    /// Filter `records` to `window` (relative to `now`) and compute the full
    /// statistics set over the result.
    #[must_use]
    pub fn compute(records: &[Audit], window: TimeWindow, now: DateTime<Utc>) -> Self {
        let filtered = filter_by_window(records, window, now);
        let dist = distribution(&filtered);
        let last_audit_score = sorted_averages(&filtered).last().copied().unwrap_or(0.0);
        Self {
            window,
            total: filtered.len(),
            section_averages: section_averages(&filtered),
            overall_average: overall_average(&filtered),
            excellent_count: dist.excellent,
            excellent_ratio: excellent_ratio(&filtered),
            trend: trend(&filtered),
            distribution: dist,
            last_audit_score,
        }
    }
}
