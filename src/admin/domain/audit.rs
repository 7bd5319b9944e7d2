//! Append-only audit entries describing admin console changes.

use crate::staff::domain::{AccessLevel, StaffId, StaffStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditEntryId(Uuid);

impl AuditEntryId {
    /// Creates a new random audit entry identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for AuditEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuditEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Change recorded by an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AuditAction {
    /// A staff member was added to the directory.
    StaffAdded {
        /// The new member.
        staff_id: StaffId,
        /// Access level granted on creation.
        access_level: AccessLevel,
    },
    /// A staff member was removed from the directory.
    StaffRemoved {
        /// The removed member.
        staff_id: StaffId,
    },
    /// A staff member's access level changed.
    AccessLevelChanged {
        /// The affected member.
        staff_id: StaffId,
        /// Previous access level.
        from: AccessLevel,
        /// New access level.
        to: AccessLevel,
    },
    /// A staff member was banned or unbanned.
    StaffStatusChanged {
        /// The affected member.
        staff_id: StaffId,
        /// Previous status.
        from: StaffStatus,
        /// New status.
        to: StaffStatus,
    },
    /// Maintenance mode was switched on or off.
    MaintenanceModeChanged {
        /// New maintenance mode flag.
        enabled: bool,
    },
}

impl AuditAction {
    /// Returns the canonical name of the action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StaffAdded { .. } => "staff_added",
            Self::StaffRemoved { .. } => "staff_removed",
            Self::AccessLevelChanged { .. } => "access_level_changed",
            Self::StaffStatusChanged { .. } => "staff_status_changed",
            Self::MaintenanceModeChanged { .. } => "maintenance_mode_changed",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored audit entry fields.
#[derive(Debug, Clone)]
pub struct PersistedAuditEntry {
    /// Persisted entry identifier.
    pub id: AuditEntryId,
    /// Administrator who made the change.
    pub actor_id: StaffId,
    /// Recorded change.
    pub action: AuditAction,
    /// Recording timestamp.
    pub recorded_at: DateTime<Utc>,
}

/// Audit log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    id: AuditEntryId,
    actor_id: StaffId,
    action: AuditAction,
    recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Records `action` performed by `actor_id` now.
    #[must_use]
    pub fn new(actor_id: StaffId, action: AuditAction, clock: &impl Clock) -> Self {
        Self {
            id: AuditEntryId::new(),
            actor_id,
            action,
            recorded_at: clock.utc(),
        }
    }

    /// Reconstructs an entry from storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedAuditEntry) -> Self {
        Self {
            id: data.id,
            actor_id: data.actor_id,
            action: data.action,
            recorded_at: data.recorded_at,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> AuditEntryId {
        self.id
    }

    /// Returns the administrator who made the change.
    #[must_use]
    pub const fn actor_id(&self) -> StaffId {
        self.actor_id
    }

    /// Returns the recorded change.
    #[must_use]
    pub const fn action(&self) -> AuditAction {
        self.action
    }

    /// Returns when the change was recorded.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
