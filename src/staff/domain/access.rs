//! Access levels and account status.

use super::{ParseAccessLevelError, ParseStaffStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse role gating task review and admin actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Regular staff: works on tasks assigned to them.
    Staff,
    /// Creates, assigns and reviews tasks.
    Manager,
    /// Everything a manager can do plus user administration.
    Admin,
}

impl AccessLevel {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }

    /// Returns `true` for levels that may create, assign and review tasks.
    #[must_use]
    pub const fn can_manage_tasks(self) -> bool {
        matches!(self, Self::Manager | Self::Admin)
    }

    /// Returns `true` for the administrator level.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AccessLevel {
    type Error = ParseAccessLevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "staff" => Ok(Self::Staff),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseAccessLevelError(value.to_owned())),
        }
    }
}

/// Account status of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
    /// The account may act in the system.
    Active,
    /// The account has been banned by an administrator.
    Banned,
}

impl StaffStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Banned => "banned",
        }
    }
}

impl fmt::Display for StaffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StaffStatus {
    type Error = ParseStaffStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "banned" => Ok(Self::Banned),
            _ => Err(ParseStaffStatusError(value.to_owned())),
        }
    }
}
