//! Diesel row models for staff persistence.

use super::schema::staff;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for staff records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = staff)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StaffRow {
    /// Internal staff identifier.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub id: uuid::Uuid,
    /// Display name.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub full_name: String,
    /// Email address.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub email: String,
    /// Access level.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub access_level: String,
    /// Account status.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub status: String,
    /// Optional avatar URL.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    pub avatar_url: Option<String>,
    /// Creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub updated_at: DateTime<Utc>,
}

/// Insert model for staff records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = staff)]
pub struct NewStaffRow {
    /// Internal staff identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Access level.
    pub access_level: String,
    /// Account status.
    pub status: String,
    /// Optional avatar URL.
    pub avatar_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
