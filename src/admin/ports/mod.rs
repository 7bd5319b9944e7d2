//! Ports for the audit log and application settings.

mod audit;
mod settings;

pub use audit::AuditLogRepository;
pub use settings::SettingsRepository;

use std::sync::Arc;
use thiserror::Error;

/// Result type for admin store operations.
pub type AdminStoreResult<T> = Result<T, AdminStoreError>;

/// Errors returned by audit log and settings implementations.
#[derive(Debug, Clone, Error)]
pub enum AdminStoreError {
    /// Stored data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AdminStoreError {
    /// Wraps a data-quality or deserialization error from stored rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
