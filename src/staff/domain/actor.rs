//! The acting staff member behind a request.

use super::{AccessLevel, StaffId};
use serde::{Deserialize, Serialize};

/// Identity and role of whoever is performing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    id: StaffId,
    access_level: AccessLevel,
}

impl Actor {
    /// Creates an actor from an identifier and access level.
    #[must_use]
    pub const fn new(id: StaffId, access_level: AccessLevel) -> Self {
        Self { id, access_level }
    }

    /// Returns the acting staff identifier.
    #[must_use]
    pub const fn id(&self) -> StaffId {
        self.id
    }

    /// Returns the actor's access level.
    #[must_use]
    pub const fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    /// Returns `true` when the actor may create, assign and review tasks.
    #[must_use]
    pub const fn can_manage_tasks(&self) -> bool {
        self.access_level.can_manage_tasks()
    }

    /// Returns `true` when the actor is an administrator.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.access_level.is_admin()
    }
}
