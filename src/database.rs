//! `PostgreSQL` connection pooling and schema bootstrap.

use crate::config::StaffNetConfig;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;
use tracing::info;

/// Schema applied by [`ensure_schema`]. Every statement is idempotent.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../migrations/2026-10-19-000000_create_staffnet_tables/up.sql");

/// Connection pool shared by every `PostgreSQL` adapter.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Errors raised while connecting to or preparing the database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The pool could not be built or a connection could not be checked out.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),

    /// Applying the schema failed.
    #[error("schema bootstrap failed: {0}")]
    Schema(#[from] diesel::result::Error),

    /// The blocking bootstrap task panicked or was cancelled.
    #[error("schema bootstrap task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Builds a connection pool sized from `config`.
///
/// # Errors
///
/// Returns [`DatabaseError::Pool`] when no connection can be established.
pub fn build_pool(config: &StaffNetConfig) -> Result<PgPool, DatabaseError> {
    let manager = ConnectionManager::<PgConnection>::new(config.database_url());
    let pool = Pool::builder().max_size(config.pool_size()).build(manager)?;
    Ok(pool)
}

/// Creates the `staff`, `tasks`, `chat_messages`, `audit_log` and `settings`
/// tables when missing.
///
/// # Errors
///
/// Returns [`DatabaseError`] when a connection cannot be obtained or a
/// statement fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    let pool_handle = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<(), DatabaseError> {
        let mut connection = pool_handle.get()?;
        connection.batch_execute(CREATE_SCHEMA_SQL)?;
        Ok(())
    })
    .await??;
    info!("database schema is up to date");
    Ok(())
}
