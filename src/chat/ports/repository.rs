//! Repository port for chat message storage.

use crate::chat::domain::{ChatMessage, MessageId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for chat repository operations.
pub type ChatRepositoryResult<T> = Result<T, ChatRepositoryError>;

/// Append-only chat message store.
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Appends a message.
    ///
    /// # Errors
    ///
    /// Returns [`ChatRepositoryError::DuplicateMessage`] when the message ID
    /// already exists.
    async fn append(&self, message: &ChatMessage) -> ChatRepositoryResult<()>;

    /// Returns at most `limit` of the most recent messages, oldest first.
    async fn list_recent(&self, limit: usize) -> ChatRepositoryResult<Vec<ChatMessage>>;
}

/// Errors returned by chat repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ChatRepositoryError {
    /// A message with the same identifier already exists.
    #[error("duplicate message identifier: {0}")]
    DuplicateMessage(MessageId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ChatRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
