//! Diesel row models for chat persistence.

use super::schema::chat_messages;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for chat messages.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chat_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChatMessageRow {
    /// Internal message identifier.
    pub id: uuid::Uuid,
    /// Sending staff member.
    pub sender_id: uuid::Uuid,
    /// Message text.
    pub content: String,
    /// Send timestamp.
    pub sent_at: DateTime<Utc>,
}

/// Insert model for chat messages.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = chat_messages)]
pub struct NewChatMessageRow {
    /// Internal message identifier.
    pub id: uuid::Uuid,
    /// Sending staff member.
    pub sender_id: uuid::Uuid,
    /// Message text.
    pub content: String,
    /// Send timestamp.
    pub sent_at: DateTime<Utc>,
}
