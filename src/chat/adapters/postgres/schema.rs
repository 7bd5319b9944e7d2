//! Diesel schema for chat persistence.

diesel::table! {
    /// Chat messages in send order.
    chat_messages (id) {
        /// Internal message identifier.
        id -> Uuid,
        /// Sending staff member.
        sender_id -> Uuid,
        /// Message text.
        content -> Text,
        /// Send timestamp.
        sent_at -> Timestamptz,
    }
}
