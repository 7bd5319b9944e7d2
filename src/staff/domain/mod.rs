//! Domain model for the staff directory.
//!
//! Staff members carry an access level that gates task review and admin
//! actions, and a status that can bar them from acting at all.

mod access;
mod actor;
mod error;
mod ids;
mod member;

pub use access::{AccessLevel, StaffStatus};
pub use actor::Actor;
pub use error::{ParseAccessLevelError, ParseStaffStatusError, StaffDomainError};
pub use ids::{EmailAddress, FullName, StaffId};
pub use member::{PersistedStaffData, StaffMember};
