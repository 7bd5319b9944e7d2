//! Application services for the staff directory.

mod directory;

pub use directory::{
    AddStaffRequest, StaffDirectoryError, StaffDirectoryResult, StaffDirectoryService,
};
