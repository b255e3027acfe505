//! # gemba-core
//!
//! Core types, the audit aggregator, and submission validation for Gemba.
//!
//! This crate provides the foundational types shared across all Gemba crates:
//! - Entity structs for audits and the responsible party
//! - The five 5S sections and the rating buckets derived from averages
//! - Pure statistics over audit sets (window filtering, averages, trend,
//!   distribution)
//! - Field-collecting submission validation
//! - Wire request/response types shared by the server and CLI
//!
//! Everything here is pure computation over its inputs. No I/O, no clocks
//! (functions that need a time base take `now` as an argument), no hidden
//! state.

pub mod entities;
pub mod sections;
pub mod stats;
pub mod validate;
pub mod wire;
