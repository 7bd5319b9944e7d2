//! Staff member aggregate root.

use super::{AccessLevel, Actor, EmailAddress, FullName, StaffId, StaffStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Staff member aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    id: StaffId,
    full_name: FullName,
    email: EmailAddress,
    access_level: AccessLevel,
    status: StaffStatus,
    avatar_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedStaffData {
    /// Persisted staff identifier.
    pub id: StaffId,
    /// Persisted display name.
    pub full_name: FullName,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted access level.
    pub access_level: AccessLevel,
    /// Persisted account status.
    pub status: StaffStatus,
    /// Persisted avatar URL, if any.
    pub avatar_url: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl StaffMember {
    /// Creates a new, active staff member.
    #[must_use]
    pub fn new(
        full_name: FullName,
        email: EmailAddress,
        access_level: AccessLevel,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: StaffId::new(),
            full_name,
            email,
            access_level,
            status: StaffStatus::Active,
            avatar_url: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Sets the avatar URL shown in directory listings.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Reconstructs a staff member from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedStaffData) -> Self {
        Self {
            id: data.id,
            full_name: data.full_name,
            email: data.email,
            access_level: data.access_level,
            status: data.status,
            avatar_url: data.avatar_url,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the staff identifier.
    #[must_use]
    pub const fn id(&self) -> StaffId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn full_name(&self) -> &FullName {
        &self.full_name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the access level.
    #[must_use]
    pub const fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    /// Returns the account status.
    #[must_use]
    pub const fn status(&self) -> StaffStatus {
        self.status
    }

    /// Returns the avatar URL, if any.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the account is banned.
    #[must_use]
    pub const fn is_banned(&self) -> bool {
        matches!(self.status, StaffStatus::Banned)
    }

    /// Returns the member as an [`Actor`], or `None` while banned.
    #[must_use]
    pub const fn as_actor(&self) -> Option<Actor> {
        if self.is_banned() {
            return None;
        }
        Some(Actor::new(self.id, self.access_level))
    }

    /// Changes the access level.
    pub fn change_access_level(&mut self, access_level: AccessLevel, clock: &impl Clock) {
        self.access_level = access_level;
        self.touch(clock);
    }

    /// Bans the account, setting status to [`StaffStatus::Banned`].
    pub fn ban(&mut self, clock: &impl Clock) {
        self.status = StaffStatus::Banned;
        self.touch(clock);
    }

    /// Lifts a ban, setting status to [`StaffStatus::Active`].
    pub fn unban(&mut self, clock: &impl Clock) {
        self.status = StaffStatus::Active;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
