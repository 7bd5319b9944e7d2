//! Identity provider resolving a known staff identifier through the directory.

use async_trait::async_trait;
use std::sync::Arc;

use crate::staff::{
    domain::{Actor, StaffId},
    ports::{IdentityError, IdentityProvider, IdentityResult, StaffRepository},
};

/// Resolves the actor from the staff repository on every call, so role
/// changes and bans take effect immediately.
#[derive(Clone)]
pub struct DirectoryIdentityProvider<R>
where
    R: StaffRepository,
{
    repository: Arc<R>,
    staff_id: StaffId,
}

impl<R> DirectoryIdentityProvider<R>
where
    R: StaffRepository,
{
    /// Creates a provider acting as `staff_id`.
    #[must_use]
    pub const fn new(repository: Arc<R>, staff_id: StaffId) -> Self {
        Self {
            repository,
            staff_id,
        }
    }
}

#[async_trait]
impl<R> IdentityProvider for DirectoryIdentityProvider<R>
where
    R: StaffRepository,
{
    async fn current_actor(&self) -> IdentityResult<Actor> {
        let member = self
            .repository
            .find_by_id(self.staff_id)
            .await?
            .ok_or(IdentityError::UnknownStaff(self.staff_id))?;
        member
            .as_actor()
            .ok_or(IdentityError::Banned(self.staff_id))
    }
}
