//! Board view records.

mod entry;

pub use entry::{DashboardStats, TaskBoardEntry};
