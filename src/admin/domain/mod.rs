//! Audit log records.

mod audit;

pub use audit::{AuditAction, AuditEntry, AuditEntryId, PersistedAuditEntry};
