//! Chat orchestration service.

mod chat;

pub use chat::{ChatError, ChatResult, ChatService};
