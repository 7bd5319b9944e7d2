//! `PostgreSQL` adapter for the task board query.

mod query;

pub use query::PostgresTaskBoard;
