//! `PostgreSQL` implementations of the audit log and settings ports.

use super::{
    models::{AuditRow, NewAuditRow, SettingRow},
    schema::{audit_log, settings},
};
use crate::admin::{
    domain::{AuditAction, AuditEntry, AuditEntryId, PersistedAuditEntry},
    ports::{AdminStoreError, AdminStoreResult, AuditLogRepository, SettingsRepository},
};
use crate::database::PgPool;
use crate::staff::domain::StaffId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use serde_json::Value;

const MAINTENANCE_MODE_KEY: &str = "maintenance_mode";

async fn run_blocking<F, T>(pool: &PgPool, f: F) -> AdminStoreResult<T>
where
    F: FnOnce(&mut PgConnection) -> AdminStoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool_handle = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool_handle.get().map_err(AdminStoreError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(AdminStoreError::persistence)?
}

/// `PostgreSQL`-backed audit log.
#[derive(Debug, Clone)]
pub struct PostgresAuditLog {
    pool: PgPool,
}

impl PostgresAuditLog {
    /// Creates a new audit log from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLog {
    async fn record(&self, entry: &AuditEntry) -> AdminStoreResult<()> {
        let row = NewAuditRow {
            id: entry.id().into_inner(),
            actor_id: entry.actor_id().into_inner(),
            action: serde_json::to_value(entry.action()).map_err(AdminStoreError::persistence)?,
            recorded_at: entry.recorded_at(),
        };

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(audit_log::table)
                .values(&row)
                .execute(connection)
                .map_err(AdminStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn list_recent(&self, limit: usize) -> AdminStoreResult<Vec<AuditEntry>> {
        let row_limit = i64::try_from(limit).unwrap_or(i64::MAX);
        run_blocking(&self.pool, move |connection| {
            let rows = audit_log::table
                .order((audit_log::recorded_at.desc(), audit_log::id.desc()))
                .limit(row_limit)
                .select(AuditRow::as_select())
                .load::<AuditRow>(connection)
                .map_err(AdminStoreError::persistence)?;
            rows.into_iter().map(row_to_entry).collect()
        })
        .await
    }
}

fn row_to_entry(row: AuditRow) -> AdminStoreResult<AuditEntry> {
    let action = serde_json::from_value::<AuditAction>(row.action)
        .map_err(AdminStoreError::invalid_persisted_data)?;
    Ok(AuditEntry::from_persisted(PersistedAuditEntry {
        id: AuditEntryId::from_uuid(row.id),
        actor_id: StaffId::from_uuid(row.actor_id),
        action,
        recorded_at: row.recorded_at,
    }))
}

/// `PostgreSQL`-backed settings; a missing row reads as the default value.
#[derive(Debug, Clone)]
pub struct PostgresSettings {
    pool: PgPool,
}

impl PostgresSettings {
    /// Creates a new settings store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettings {
    async fn maintenance_mode(&self) -> AdminStoreResult<bool> {
        run_blocking(&self.pool, |connection| {
            let stored = settings::table
                .filter(settings::key.eq(MAINTENANCE_MODE_KEY))
                .select(settings::value)
                .first::<Value>(connection)
                .optional()
                .map_err(AdminStoreError::persistence)?;
            stored.map_or(Ok(false), |value| {
                serde_json::from_value::<bool>(value)
                    .map_err(AdminStoreError::invalid_persisted_data)
            })
        })
        .await
    }

    async fn set_maintenance_mode(&self, enabled: bool) -> AdminStoreResult<()> {
        let row = SettingRow {
            key: MAINTENANCE_MODE_KEY.to_owned(),
            value: Value::Bool(enabled),
        };
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(settings::table)
                .values(&row)
                .on_conflict(settings::key)
                .do_update()
                .set(settings::value.eq(&row.value))
                .execute(connection)
                .map_err(AdminStoreError::persistence)?;
            Ok(())
        })
        .await
    }
}
