//! Domain model for chat messages.

mod content;
mod error;
mod ids;
mod message;

pub use content::{MAX_CONTENT_LENGTH, MessageContent};
pub use error::ChatDomainError;
pub use ids::MessageId;
pub use message::{ChatMessage, PersistedChatMessage};
