//! Shared test helpers for `PostgreSQL` integration tests.

use super::cluster::shared_server;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use mockable::DefaultClock;
use staffnet::database::{self, PgPool};
use staffnet::staff::domain::{AccessLevel, EmailAddress, FullName, StaffMember};
use uuid::Uuid;

/// Points every pooled connection at the test schema.
#[derive(Debug)]
struct SearchPath(String);

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for SearchPath {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!("SET search_path TO {}", self.0))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// A throwaway schema holding the `StaffNet` tables, dropped on scope exit.
pub struct TestSchema {
    pub pool: PgPool,
    name: String,
}

impl TestSchema {
    /// Creates a fresh schema on the shared test server.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot connect or the DDL fails.
    pub async fn create() -> eyre::Result<Self> {
        let url = shared_server().await.url().to_owned();
        let name = format!("staffnet_test_{}", Uuid::new_v4().simple());
        let pool = Pool::builder()
            .max_size(2)
            .connection_customizer(Box::new(SearchPath(name.clone())))
            .build(ConnectionManager::<PgConnection>::new(url))?;

        let create_sql = format!("CREATE SCHEMA {name}");
        let setup_pool = pool.clone();
        tokio::task::spawn_blocking(move || -> eyre::Result<()> {
            setup_pool.get()?.batch_execute(&create_sql)?;
            Ok(())
        })
        .await??;
        database::ensure_schema(&pool).await?;

        Ok(Self { pool, name })
    }
}

impl Drop for TestSchema {
    fn drop(&mut self) {
        if let Ok(mut conn) = self.pool.get() {
            let _dropped =
                conn.batch_execute(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.name));
        }
    }
}

/// Builds an active staff member with the given email.
///
/// # Errors
///
/// Returns an error if the name or email is invalid.
pub fn member(name: &str, email: &str, access_level: AccessLevel) -> eyre::Result<StaffMember> {
    Ok(StaffMember::new(
        FullName::new(name)?,
        EmailAddress::new(email)?,
        access_level,
        &DefaultClock,
    ))
}
