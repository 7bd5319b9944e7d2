//! `PostgreSQL` repository implementation for the chat log.

use super::{
    models::{ChatMessageRow, NewChatMessageRow},
    schema::chat_messages,
};
use crate::chat::{
    domain::{ChatMessage, MessageContent, MessageId, PersistedChatMessage},
    ports::{ChatRepository, ChatRepositoryError, ChatRepositoryResult},
};
use crate::database::PgPool;
use crate::staff::domain::StaffId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed chat repository.
#[derive(Debug, Clone)]
pub struct PostgresChatRepository {
    pool: PgPool,
}

impl PostgresChatRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ChatRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ChatRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ChatRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ChatRepositoryError::persistence)?
    }
}

#[async_trait]
impl ChatRepository for PostgresChatRepository {
    async fn append(&self, message: &ChatMessage) -> ChatRepositoryResult<()> {
        let message_id = message.id();
        let row = NewChatMessageRow {
            id: message_id.into_inner(),
            sender_id: message.sender_id().into_inner(),
            content: message.content().as_str().to_owned(),
            sent_at: message.sent_at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(chat_messages::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ChatRepositoryError::DuplicateMessage(message_id)
                    }
                    _ => ChatRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_recent(&self, limit: usize) -> ChatRepositoryResult<Vec<ChatMessage>> {
        let row_limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.run_blocking(move |connection| {
            let rows = chat_messages::table
                .order((chat_messages::sent_at.desc(), chat_messages::id.desc()))
                .limit(row_limit)
                .select(ChatMessageRow::as_select())
                .load::<ChatMessageRow>(connection)
                .map_err(ChatRepositoryError::persistence)?;
            rows.into_iter().rev().map(row_to_message).collect()
        })
        .await
    }
}

fn row_to_message(row: ChatMessageRow) -> ChatRepositoryResult<ChatMessage> {
    let content =
        MessageContent::new(row.content).map_err(ChatRepositoryError::invalid_persisted_data)?;
    Ok(ChatMessage::from_persisted(PersistedChatMessage {
        id: MessageId::from_uuid(row.id),
        sender_id: StaffId::from_uuid(row.sender_id),
        content,
        sent_at: row.sent_at,
    }))
}
