//! `PostgreSQL` repository implementation for staff records.

use super::{
    models::{NewStaffRow, StaffRow},
    schema::staff,
};
use crate::database::PgPool;
use crate::staff::{
    domain::{
        AccessLevel, EmailAddress, FullName, PersistedStaffData, StaffId, StaffMember,
        StaffStatus,
    },
    ports::{StaffRepository, StaffRepositoryError, StaffRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};


/// `PostgreSQL`-backed staff repository.
#[derive(Debug, Clone)]
pub struct PostgresStaffRepository {
    pool: PgPool,
}

impl PostgresStaffRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> StaffRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> StaffRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(StaffRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(StaffRepositoryError::persistence)?
    }
}

#[async_trait]
impl StaffRepository for PostgresStaffRepository {
    async fn store(&self, member: &StaffMember) -> StaffRepositoryResult<()> {
        let staff_id = member.id();
        let email = member.email().clone();
        let new_row = to_new_row(member);

        self.run_blocking(move |connection| {
            diesel::insert_into(staff::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_email_unique_violation(info.as_ref()) =>
                    {
                        StaffRepositoryError::DuplicateEmail(email.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        StaffRepositoryError::DuplicateStaff(staff_id)
                    }
                    _ => StaffRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, member: &StaffMember) -> StaffRepositoryResult<()> {
        let staff_id = member.id();
        let email = member.email().clone();
        let row = to_new_row(member);

        self.run_blocking(move |connection| {
            let updated = diesel::update(staff::table.filter(staff::id.eq(row.id)))
                .set((
                    staff::full_name.eq(&row.full_name),
                    staff::email.eq(&row.email),
                    staff::access_level.eq(&row.access_level),
                    staff::status.eq(&row.status),
                    staff::avatar_url.eq(&row.avatar_url),
                    staff::updated_at.eq(row.updated_at),
                ))
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_email_unique_violation(info.as_ref()) =>
                    {
                        StaffRepositoryError::DuplicateEmail(email.clone())
                    }
                    _ => StaffRepositoryError::persistence(err),
                })?;
            if updated == 0 {
                return Err(StaffRepositoryError::NotFound(staff_id));
            }
            Ok(())
        })
        .await
    }

    async fn remove(&self, id: StaffId) -> StaffRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(staff::table.filter(staff::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(StaffRepositoryError::persistence)?;
            if removed == 0 {
                return Err(StaffRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: StaffId) -> StaffRepositoryResult<Option<StaffMember>> {
        self.run_blocking(move |connection| {
            let row = staff::table
                .filter(staff::id.eq(id.into_inner()))
                .select(StaffRow::as_select())
                .first::<StaffRow>(connection)
                .optional()
                .map_err(StaffRepositoryError::persistence)?;
            row.map(row_to_member).transpose()
        })
        .await
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> StaffRepositoryResult<Option<StaffMember>> {
        let lookup = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = staff::table
                .filter(staff::email.eq(lookup))
                .select(StaffRow::as_select())
                .first::<StaffRow>(connection)
                .optional()
                .map_err(StaffRepositoryError::persistence)?;
            row.map(row_to_member).transpose()
        })
        .await
    }

    async fn list_all(&self) -> StaffRepositoryResult<Vec<StaffMember>> {
        self.run_blocking(move |connection| {
            let rows = staff::table
                .order(staff::created_at.desc())
                .select(StaffRow::as_select())
                .load::<StaffRow>(connection)
                .map_err(StaffRepositoryError::persistence)?;
            rows.into_iter().map(row_to_member).collect()
        })
        .await
    }
}

fn to_new_row(member: &StaffMember) -> NewStaffRow {
    NewStaffRow {
        id: member.id().into_inner(),
        full_name: member.full_name().as_str().to_owned(),
        email: member.email().as_str().to_owned(),
        access_level: member.access_level().as_str().to_owned(),
        status: member.status().as_str().to_owned(),
        avatar_url: member.avatar_url().map(str::to_owned),
        created_at: member.created_at(),
        updated_at: member.updated_at(),
    }
}

/// Converts a persisted row into a staff member.
pub(crate) fn row_to_member(row: StaffRow) -> StaffRepositoryResult<StaffMember> {
    let StaffRow {
        id,
        full_name,
        email,
        access_level,
        status,
        avatar_url,
        created_at,
        updated_at,
    } = row;

    let data = PersistedStaffData {
        id: StaffId::from_uuid(id),
        full_name: FullName::new(full_name)
            .map_err(StaffRepositoryError::invalid_persisted_data)?,
        email: EmailAddress::new(email).map_err(StaffRepositoryError::invalid_persisted_data)?,
        access_level: AccessLevel::try_from(access_level.as_str())
            .map_err(StaffRepositoryError::invalid_persisted_data)?,
        status: StaffStatus::try_from(status.as_str())
            .map_err(StaffRepositoryError::invalid_persisted_data)?,
        avatar_url,
        created_at,
        updated_at,
    };
    Ok(StaffMember::from_persisted(data))
}

fn is_email_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_staff_email_unique")
}
