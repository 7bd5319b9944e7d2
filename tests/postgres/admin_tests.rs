//! Audit log and settings persistence against `PostgreSQL`.

use super::helpers::{TestSchema, member};
use chrono::{DateTime, Utc};
use eyre::ensure;
use staffnet::admin::{
    adapters::postgres::{PostgresAuditLog, PostgresSettings},
    domain::{AuditAction, AuditEntry, AuditEntryId, PersistedAuditEntry},
    ports::{AuditLogRepository, SettingsRepository},
};
use staffnet::staff::domain::{AccessLevel, StaffId, StaffStatus};

fn entry_at(seconds: i64, actor_id: StaffId, action: AuditAction) -> eyre::Result<AuditEntry> {
    let recorded_at = DateTime::<Utc>::from_timestamp(1_790_000_000 + seconds, 0)
        .ok_or_else(|| eyre::eyre!("timestamp out of range"))?;
    Ok(AuditEntry::from_persisted(PersistedAuditEntry {
        id: AuditEntryId::new(),
        actor_id,
        action,
        recorded_at,
    }))
}

#[tokio::test(flavor = "multi_thread")]
async fn audit_entries_round_trip_newest_first() -> eyre::Result<()> {
    let schema = TestSchema::create().await?;
    let audit_log = PostgresAuditLog::new(schema.pool.clone());
    let admin = member("Olive Owner", "owner@staffnet.test", AccessLevel::Admin)?;
    let worker = member("Sam Staff", "sam@staffnet.test", AccessLevel::Staff)?;

    let added = entry_at(
        0,
        admin.id(),
        AuditAction::StaffAdded {
            staff_id: worker.id(),
            access_level: AccessLevel::Staff,
        },
    )?;
    let banned = entry_at(
        60,
        admin.id(),
        AuditAction::StaffStatusChanged {
            staff_id: worker.id(),
            from: StaffStatus::Active,
            to: StaffStatus::Banned,
        },
    )?;
    audit_log.record(&added).await?;
    audit_log.record(&banned).await?;

    let recent = audit_log.list_recent(10).await?;
    ensure!(
        recent.iter().map(AuditEntry::id).collect::<Vec<_>>() == vec![banned.id(), added.id()],
        "unexpected audit order {recent:?}"
    );
    ensure!(recent.first() == Some(&banned), "stored entry should round-trip");
    ensure!(audit_log.list_recent(1).await?.len() == 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn maintenance_mode_defaults_off_and_persists() -> eyre::Result<()> {
    let schema = TestSchema::create().await?;
    let settings = PostgresSettings::new(schema.pool.clone());

    ensure!(!settings.maintenance_mode().await?, "missing row should read as off");
    settings.set_maintenance_mode(true).await?;
    ensure!(settings.maintenance_mode().await?);

    let reopened = PostgresSettings::new(schema.pool.clone());
    reopened.set_maintenance_mode(false).await?;
    ensure!(!settings.maintenance_mode().await?);
    Ok(())
}
