//! In-memory board query joining the in-memory task and staff repositories.

use crate::board::{
    domain::{DashboardStats, TaskBoardEntry},
    ports::{BoardQueryResult, TaskBoardQuery},
};
use crate::staff::adapters::memory::InMemoryStaffRepository;
use crate::task::{adapters::memory::InMemoryTaskRepository, domain::Task};
use async_trait::async_trait;
use std::sync::Arc;

/// Board query over shared in-memory repositories.
#[derive(Debug, Clone)]
pub struct InMemoryTaskBoard {
    tasks: Arc<InMemoryTaskRepository>,
    staff: Arc<InMemoryStaffRepository>,
}

impl InMemoryTaskBoard {
    /// Creates a board reading from `tasks` and `staff`.
    #[must_use]
    pub const fn new(
        tasks: Arc<InMemoryTaskRepository>,
        staff: Arc<InMemoryStaffRepository>,
    ) -> Self {
        Self { tasks, staff }
    }
}

#[async_trait]
impl TaskBoardQuery for InMemoryTaskBoard {
    async fn list_board(&self) -> BoardQueryResult<Vec<TaskBoardEntry>> {
        let tasks = self.tasks.snapshot()?;
        let members = self.staff.snapshot()?;
        Ok(tasks
            .into_iter()
            .map(|task| {
                let assignee = members.get(&task.assigned_to()).cloned();
                TaskBoardEntry::new(task, assignee)
            })
            .collect())
    }

    async fn dashboard_stats(&self) -> BoardQueryResult<DashboardStats> {
        let total_staff = self.staff.snapshot()?.len();
        let tasks = self.tasks.snapshot()?;
        Ok(DashboardStats::tally(
            u64::try_from(total_staff).unwrap_or(u64::MAX),
            tasks.iter().map(Task::status),
        ))
    }
}
