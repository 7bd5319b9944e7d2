//! In-memory chat repository for tests and single-process use.

use crate::chat::{
    domain::{ChatMessage, MessageId},
    ports::{ChatRepository, ChatRepositoryError, ChatRepositoryResult},
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory chat log.
///
/// History is ordered by `(sent_at, id)`, matching the `PostgreSQL` adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatRepository {
    state: Arc<RwLock<InMemoryChatState>>,
}

#[derive(Debug, Default)]
struct InMemoryChatState {
    messages: Vec<ChatMessage>,
    ids: HashSet<MessageId>,
}

impl InMemoryChatRepository {
    /// Creates an empty chat log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> ChatRepositoryError {
    ChatRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn append(&self, message: &ChatMessage) -> ChatRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if !state.ids.insert(message.id()) {
            return Err(ChatRepositoryError::DuplicateMessage(message.id()));
        }
        state.messages.push(message.clone());
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> ChatRepositoryResult<Vec<ChatMessage>> {
        let mut messages = self.state.read().map_err(poisoned)?.messages.clone();
        messages.sort_by_key(|message| (message.sent_at(), message.id().into_inner()));
        let skip = messages.len().saturating_sub(limit);
        Ok(messages.into_iter().skip(skip).collect())
    }
}
