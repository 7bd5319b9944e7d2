//! Repository port for staff persistence and lookup.

use crate::staff::domain::{EmailAddress, StaffId, StaffMember};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for staff repository operations.
pub type StaffRepositoryResult<T> = Result<T, StaffRepositoryError>;

/// Staff persistence contract.
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// Stores a new staff member.
    ///
    /// # Errors
    ///
    /// Returns [`StaffRepositoryError::DuplicateStaff`] when the identifier
    /// already exists or [`StaffRepositoryError::DuplicateEmail`] when the
    /// email address is already registered.
    async fn store(&self, member: &StaffMember) -> StaffRepositoryResult<()>;

    /// Persists changes to an existing staff member (access level, status,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`StaffRepositoryError::NotFound`] when the member does not
    /// exist.
    async fn update(&self, member: &StaffMember) -> StaffRepositoryResult<()>;

    /// Removes a staff member.
    ///
    /// # Errors
    ///
    /// Returns [`StaffRepositoryError::NotFound`] when the member does not
    /// exist.
    async fn remove(&self, id: StaffId) -> StaffRepositoryResult<()>;

    /// Finds a staff member by identifier.
    ///
    /// Returns `None` when the member does not exist.
    async fn find_by_id(&self, id: StaffId) -> StaffRepositoryResult<Option<StaffMember>>;

    /// Finds a staff member by email address.
    ///
    /// Returns `None` when no member uses the address.
    async fn find_by_email(&self, email: &EmailAddress)
    -> StaffRepositoryResult<Option<StaffMember>>;

    /// Returns every staff member, newest first.
    async fn list_all(&self) -> StaffRepositoryResult<Vec<StaffMember>>;
}

/// Errors returned by staff repository implementations.
#[derive(Debug, Clone, Error)]
pub enum StaffRepositoryError {
    /// A staff member with the same identifier already exists.
    #[error("duplicate staff identifier: {0}")]
    DuplicateStaff(StaffId),

    /// A staff member with the same email address already exists.
    #[error("duplicate email address: {0}")]
    DuplicateEmail(EmailAddress),

    /// The staff member was not found.
    #[error("staff member not found: {0}")]
    NotFound(StaffId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StaffRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
