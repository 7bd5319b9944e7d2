//! `PostgreSQL` adapters for the audit log and application settings.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresAuditLog, PostgresSettings};
