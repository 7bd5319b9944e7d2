//! Error types for chat message validation.

use thiserror::Error;

/// Errors returned while constructing chat domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatDomainError {
    /// The message is empty after trimming.
    #[error("message content must not be empty")]
    EmptyContent,

    /// The message exceeds the maximum length.
    #[error("message content is {length} characters, limit is {limit}")]
    ContentTooLong {
        /// Length of the rejected content in characters.
        length: usize,
        /// Maximum accepted length.
        limit: usize,
    },
}
