//! Diesel row models for admin persistence.

use super::schema::{audit_log, settings};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for audit entries.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = audit_log)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuditRow {
    /// Internal entry identifier.
    pub id: uuid::Uuid,
    /// Administrator who made the change.
    pub actor_id: uuid::Uuid,
    /// Tagged change payload.
    pub action: Value,
    /// Recording timestamp.
    pub recorded_at: DateTime<Utc>,
}

/// Insert model for audit entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = audit_log)]
pub struct NewAuditRow {
    /// Internal entry identifier.
    pub id: uuid::Uuid,
    /// Administrator who made the change.
    pub actor_id: uuid::Uuid,
    /// Tagged change payload.
    pub action: Value,
    /// Recording timestamp.
    pub recorded_at: DateTime<Utc>,
}

/// Insert model for settings.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = settings)]
pub struct SettingRow {
    /// Setting name.
    pub key: String,
    /// Setting value.
    pub value: Value,
}
