//! Service layer for adding and looking up staff members.

use crate::staff::{
    domain::{AccessLevel, EmailAddress, FullName, StaffDomainError, StaffId, StaffMember},
    ports::{IdentityError, IdentityProvider, StaffRepository, StaffRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request payload for adding a staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStaffRequest {
    full_name: String,
    email: String,
    access_level: AccessLevel,
    avatar_url: Option<String>,
}

impl AddStaffRequest {
    /// Creates a request with the required staff fields.
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        access_level: AccessLevel,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            access_level,
            avatar_url: None,
        }
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Validates the request and builds an active staff member.
    pub(crate) fn into_member(self, clock: &impl Clock) -> Result<StaffMember, StaffDomainError> {
        let mut member = StaffMember::new(
            FullName::new(self.full_name)?,
            EmailAddress::new(self.email)?,
            self.access_level,
            clock,
        );
        if let Some(url) = self.avatar_url {
            member = member.with_avatar_url(url);
        }
        Ok(member)
    }
}

/// Service-level errors for staff directory operations.
#[derive(Debug, Error)]
pub enum StaffDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] StaffDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] StaffRepositoryError),
    /// The current actor could not be resolved.
    #[error(transparent)]
    Identity(#[from] IdentityError),
    /// The actor is not an administrator.
    #[error("staff member {actor_id} is not allowed to manage the directory")]
    Unauthorized {
        /// The rejected actor.
        actor_id: StaffId,
    },
    /// Bootstrapping an administrator requires an empty directory.
    #[error("the staff directory already has members")]
    DirectoryNotEmpty,
}

/// Result type for staff directory service operations.
pub type StaffDirectoryResult<T> = Result<T, StaffDirectoryError>;

/// Staff directory orchestration service.
#[derive(Clone)]
pub struct StaffDirectoryService<R, I, C>
where
    R: StaffRepository,
    I: IdentityProvider,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    identity: Arc<I>,
    clock: Arc<C>,
}

impl<R, I, C> StaffDirectoryService<R, I, C>
where
    R: StaffRepository,
    I: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Creates a new staff directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, identity: Arc<I>, clock: Arc<C>) -> Self {
        Self {
            repository,
            identity,
            clock,
        }
    }

    /// Adds a staff member on behalf of an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDirectoryError::Domain`] for invalid names or emails,
    /// [`StaffDirectoryError::Unauthorized`] when the actor is not an admin,
    /// or [`StaffDirectoryError::Repository`] when persistence rejects the
    /// record (for example a duplicate email).
    pub async fn add_staff(&self, request: AddStaffRequest) -> StaffDirectoryResult<StaffMember> {
        let member = request.into_member(&*self.clock)?;
        let actor = self.identity.current_actor().await?;
        if !actor.is_admin() {
            warn!(actor = %actor.id(), "rejected staff addition by non-admin");
            return Err(StaffDirectoryError::Unauthorized {
                actor_id: actor.id(),
            });
        }

        self.repository.store(&member).await?;
        info!(
            staff_id = %member.id(),
            access_level = %member.access_level(),
            added_by = %actor.id(),
            "staff member added"
        );
        Ok(member)
    }

    /// Creates the first administrator of an empty directory.
    ///
    /// The requested access level is ignored; the member is always created
    /// as [`AccessLevel::Admin`].
    ///
    /// # Errors
    ///
    /// Returns [`StaffDirectoryError::DirectoryNotEmpty`] when any staff
    /// member already exists, [`StaffDirectoryError::Domain`] for invalid
    /// input, or [`StaffDirectoryError::Repository`] on persistence failure.
    pub async fn bootstrap_admin(
        &self,
        request: AddStaffRequest,
    ) -> StaffDirectoryResult<StaffMember> {
        let member = AddStaffRequest {
            access_level: AccessLevel::Admin,
            ..request
        }
        .into_member(&*self.clock)?;
        if !self.repository.list_all().await?.is_empty() {
            return Err(StaffDirectoryError::DirectoryNotEmpty);
        }
        self.repository.store(&member).await?;
        info!(staff_id = %member.id(), "bootstrap administrator created");
        Ok(member)
    }

    /// Finds a staff member by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDirectoryError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, id: StaffId) -> StaffDirectoryResult<Option<StaffMember>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Finds a staff member by email address.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDirectoryError::Domain`] when the address is malformed
    /// or [`StaffDirectoryError::Repository`] when lookup fails.
    pub async fn find_by_email(&self, email: &str) -> StaffDirectoryResult<Option<StaffMember>> {
        let address = EmailAddress::new(email)?;
        Ok(self.repository.find_by_email(&address).await?)
    }

    /// Returns every staff member, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDirectoryError::Repository`] when lookup fails.
    pub async fn list_all(&self) -> StaffDirectoryResult<Vec<StaffMember>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns staff members who are not banned, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StaffDirectoryError::Repository`] when lookup fails.
    pub async fn list_active(&self) -> StaffDirectoryResult<Vec<StaffMember>> {
        let members = self.repository.list_all().await?;
        Ok(members
            .into_iter()
            .filter(|member| !member.is_banned())
            .collect())
    }
}
