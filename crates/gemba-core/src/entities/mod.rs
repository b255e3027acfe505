//! Entity structs for the Gemba domain.
//!
//! The audit record maps to a row in the libSQL `audits` table and, on the
//! wire, to the JSON document the original API served. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! generation.

mod audit;
mod responsible;

pub use audit::{Audit, Notes, Scores, mean_of};
pub use responsible::Responsible;
