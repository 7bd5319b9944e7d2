//! Service sending and reading chat messages on behalf of the current actor.

use crate::chat::{
    domain::{ChatDomainError, ChatMessage, MessageContent},
    ports::{ChatEvent, ChatRepository, ChatRepositoryError},
};
use crate::notify::{NoopNotifier, Notifier};
use crate::staff::ports::{IdentityError, IdentityProvider};
use crate::tentative::TentativeUpdate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for chat operations.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The message content was rejected.
    #[error(transparent)]
    Domain(#[from] ChatDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ChatRepositoryError),
    /// The current actor could not be resolved.
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Result type for chat service operations.
pub type ChatResult<T> = Result<T, ChatError>;

/// Chat orchestration service.
#[derive(Clone)]
pub struct ChatService<R, I, C>
where
    R: ChatRepository,
    I: IdentityProvider,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    identity: Arc<I>,
    clock: Arc<C>,
    notifier: Arc<dyn Notifier<ChatEvent>>,
}

impl<R, I, C> ChatService<R, I, C>
where
    R: ChatRepository,
    I: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Creates a chat service that publishes no delivery events.
    #[must_use]
    pub fn new(repository: Arc<R>, identity: Arc<I>, clock: Arc<C>) -> Self {
        Self {
            repository,
            identity,
            clock,
            notifier: Arc::new(NoopNotifier),
        }
    }

    /// Publishes delivery events to `notifier`.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier<ChatEvent>>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Sends `content` as the current actor.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Domain`] for blank or overlong content,
    /// [`ChatError::Identity`] when nobody may act, or the repository error
    /// when the message could not be stored.
    pub async fn send(&self, content: impl Into<String> + Send) -> ChatResult<ChatMessage> {
        let text = MessageContent::new(content)?;
        let actor = self.identity.current_actor().await?;
        let pending = TentativeUpdate::inserting(ChatMessage::new(actor.id(), text, &*self.clock));

        self.notifier
            .notify(ChatEvent::Pending(pending.tentative().clone()));
        match self.repository.append(pending.tentative()).await {
            Ok(()) => {
                let message = pending.confirm();
                info!(message_id = %message.id(), sender = %actor.id(), "chat message delivered");
                self.notifier.notify(ChatEvent::Delivered(message.clone()));
                Ok(message)
            }
            Err(err) => {
                let message_id = pending.tentative().id();
                let _discarded = pending.roll_back();
                warn!(message_id = %message_id, error = %err, "chat message failed");
                self.notifier.notify(ChatEvent::Failed { message_id });
                Err(err.into())
            }
        }
    }

    /// Returns at most `limit` of the most recent messages, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Identity`] when nobody may act or
    /// [`ChatError::Repository`] when lookup fails.
    pub async fn history(&self, limit: usize) -> ChatResult<Vec<ChatMessage>> {
        let actor = self.identity.current_actor().await?;
        debug!(actor = %actor.id(), limit, "loading chat history");
        Ok(self.repository.list_recent(limit).await?)
    }
}
