//! Task board rows and dashboard counters.

use crate::staff::domain::StaffMember;
use crate::task::domain::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// A task together with the staff record of its assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBoardEntry {
    task: Task,
    assignee: Option<StaffMember>,
}

impl TaskBoardEntry {
    /// Creates a board entry.
    #[must_use]
    pub const fn new(task: Task, assignee: Option<StaffMember>) -> Self {
        Self { task, assignee }
    }

    /// Returns the task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the assignee, or `None` when the staff record no longer
    /// exists.
    #[must_use]
    pub const fn assignee(&self) -> Option<&StaffMember> {
        self.assignee.as_ref()
    }
}

/// Counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Number of staff records, banned members included.
    pub total_staff: u64,
    /// Tasks that are not `Done`.
    pub active_tasks: u64,
    /// Tasks whose proof awaits review.
    pub pending_reviews: u64,
}

impl DashboardStats {
    /// Derives the task counters from `statuses` and pairs them with
    /// `total_staff`.
    #[must_use]
    pub fn tally(total_staff: u64, statuses: impl IntoIterator<Item = TaskStatus>) -> Self {
        statuses
            .into_iter()
            .fold(Self { total_staff, ..Self::default() }, |mut stats, status| {
                if !status.is_terminal() {
                    stats.active_tasks += 1;
                }
                if status == TaskStatus::Review {
                    stats.pending_reviews += 1;
                }
                stats
            })
    }
}
