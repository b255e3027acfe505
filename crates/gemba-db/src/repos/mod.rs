//! Repository methods, implemented as `impl AuditStore` blocks.

pub mod audits;
