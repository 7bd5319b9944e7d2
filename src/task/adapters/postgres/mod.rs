//! `PostgreSQL` adapters for task lifecycle persistence.

mod models;
mod repository;
pub(crate) mod schema;

pub(crate) use models::TaskRow;
pub(crate) use repository::row_to_task;
pub use repository::PostgresTaskRepository;
