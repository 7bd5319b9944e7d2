//! Validated chat message text.

use super::ChatDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of characters in a chat message.
pub const MAX_CONTENT_LENGTH: usize = 2000;

/// Trimmed, non-empty chat message text of at most
/// [`MAX_CONTENT_LENGTH`] characters.
///
/// # Examples
///
/// ```
/// use staffnet::chat::domain::MessageContent;
///
/// let content = MessageContent::new("  shift swap anyone?  ").expect("valid");
/// assert_eq!(content.as_str(), "shift swap anyone?");
/// assert!(MessageContent::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct MessageContent(String);

impl MessageContent {
    /// Creates validated message content.
    ///
    /// # Errors
    ///
    /// Returns [`ChatDomainError::EmptyContent`] for blank input or
    /// [`ChatDomainError::ContentTooLong`] when the trimmed text exceeds
    /// [`MAX_CONTENT_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ChatDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ChatDomainError::EmptyContent);
        }
        let length = normalized.chars().count();
        if length > MAX_CONTENT_LENGTH {
            return Err(ChatDomainError::ContentTooLong {
                length,
                limit: MAX_CONTENT_LENGTH,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the content as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MessageContent {
    type Error = ChatDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for MessageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
