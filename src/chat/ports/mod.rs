//! Ports for chat persistence and delivery notifications.

mod events;
mod repository;

pub use events::ChatEvent;
pub use repository::{ChatRepository, ChatRepositoryError, ChatRepositoryResult};
