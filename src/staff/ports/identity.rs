//! Identity-provider port yielding the acting staff member.
//!
//! Session and credential mechanics live outside the crate; services only
//! need to know who is acting and with which access level.

use super::StaffRepositoryError;
use crate::staff::domain::{Actor, StaffId};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for identity resolution.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Source of the current actor.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves the actor performing the current operation.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] when nobody is signed in, the staff record
    /// is missing or banned, or the lookup itself fails.
    async fn current_actor(&self) -> IdentityResult<Actor>;
}

/// Errors returned while resolving the current actor.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// No actor is signed in.
    #[error("no actor is signed in")]
    NotSignedIn,

    /// The signed-in identifier has no staff record.
    #[error("unknown staff member: {0}")]
    UnknownStaff(StaffId),

    /// The signed-in staff member is banned.
    #[error("staff member is banned: {0}")]
    Banned(StaffId),

    /// Looking up the staff record failed.
    #[error("identity lookup failed: {0}")]
    Lookup(#[from] StaffRepositoryError),
}
