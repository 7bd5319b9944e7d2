//! Port contracts for the staff directory.
//!
//! Ports define infrastructure-agnostic interfaces used by staff, task, chat
//! and admin services.

pub mod identity;
pub mod repository;

pub use identity::{IdentityError, IdentityProvider, IdentityResult};
pub use repository::{StaffRepository, StaffRepositoryError, StaffRepositoryResult};
