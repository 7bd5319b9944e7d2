//! In-memory adapters for task lifecycle tests and local runs.

mod repository;

pub use repository::InMemoryTaskRepository;
