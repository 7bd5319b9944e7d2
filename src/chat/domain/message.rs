//! Chat message record.

use super::{MessageContent, MessageId};
use crate::staff::domain::StaffId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A message posted to the staff chat. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    sender_id: StaffId,
    content: MessageContent,
    sent_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedChatMessage {
    /// Persisted message identifier.
    pub id: MessageId,
    /// Persisted sender.
    pub sender_id: StaffId,
    /// Persisted content.
    pub content: MessageContent,
    /// Persisted send timestamp.
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates a message sent now by `sender_id`.
    #[must_use]
    pub fn new(sender_id: StaffId, content: MessageContent, clock: &impl Clock) -> Self {
        Self {
            id: MessageId::new(),
            sender_id,
            content,
            sent_at: clock.utc(),
        }
    }

    /// Reconstructs a message from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedChatMessage) -> Self {
        Self {
            id: data.id,
            sender_id: data.sender_id,
            content: data.content,
            sent_at: data.sent_at,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the sender.
    #[must_use]
    pub const fn sender_id(&self) -> StaffId {
        self.sender_id
    }

    /// Returns the message text.
    #[must_use]
    pub const fn content(&self) -> &MessageContent {
        &self.content
    }

    /// Returns the send timestamp.
    #[must_use]
    pub const fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }
}
