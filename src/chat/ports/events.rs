//! Delivery notifications emitted by the chat service.

use crate::chat::domain::{ChatMessage, MessageId};

/// Two-phase delivery notification for chat viewers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// The message is shown locally but not yet stored.
    Pending(ChatMessage),
    /// The message was stored.
    Delivered(ChatMessage),
    /// Storing failed; viewers should drop the pending message.
    Failed {
        /// Message that was discarded.
        message_id: MessageId,
    },
}
