//! `PostgreSQL` adapter for chat message storage.

mod models;
mod repository;
mod schema;

pub use repository::PostgresChatRepository;
