//! Append-only audit log port.

use super::AdminStoreResult;
use crate::admin::domain::AuditEntry;
use async_trait::async_trait;

/// Audit log contract. Entries are never updated or removed.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Appends an entry.
    async fn record(&self, entry: &AuditEntry) -> AdminStoreResult<()>;

    /// Returns at most `limit` entries, newest first.
    async fn list_recent(&self, limit: usize) -> AdminStoreResult<Vec<AuditEntry>>;
}
