//! `PostgreSQL` adapters for staff directory persistence.

mod models;
mod repository;
pub(crate) mod schema;

pub(crate) use models::StaffRow;
pub(crate) use repository::row_to_member;
pub use repository::PostgresStaffRepository;
