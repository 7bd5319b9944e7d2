//! In-memory audit log and settings store.

use crate::admin::{
    domain::AuditEntry,
    ports::{AdminStoreError, AdminStoreResult, AuditLogRepository, SettingsRepository},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

fn poisoned(err: impl ToString) -> AdminStoreError {
    AdminStoreError::persistence(std::io::Error::other(err.to_string()))
}

/// Thread-safe in-memory audit log kept in append order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLog {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
}

impl InMemoryAuditLog {
    /// Creates an empty audit log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLog {
    async fn record(&self, entry: &AuditEntry) -> AdminStoreResult<()> {
        self.entries.write().map_err(poisoned)?.push(entry.clone());
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> AdminStoreResult<Vec<AuditEntry>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }
}

/// In-memory settings; maintenance mode starts switched off.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettings {
    maintenance_mode: Arc<RwLock<bool>>,
}

impl InMemorySettings {
    /// Creates settings with maintenance mode off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettings {
    async fn maintenance_mode(&self) -> AdminStoreResult<bool> {
        Ok(*self.maintenance_mode.read().map_err(poisoned)?)
    }

    async fn set_maintenance_mode(&self, enabled: bool) -> AdminStoreResult<()> {
        *self.maintenance_mode.write().map_err(poisoned)? = enabled;
        Ok(())
    }
}
