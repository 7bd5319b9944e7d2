//! Service exposing the task board and dashboard to signed-in staff.

use crate::board::{
    domain::{DashboardStats, TaskBoardEntry},
    ports::{BoardQueryError, TaskBoardQuery},
};
use crate::staff::ports::{IdentityError, IdentityProvider};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for board reads.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// The board query failed.
    #[error(transparent)]
    Query(#[from] BoardQueryError),
    /// The current actor could not be resolved.
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Board read service. Any active staff member may view the board.
#[derive(Clone)]
pub struct TaskBoardService<Q, I>
where
    Q: TaskBoardQuery,
    I: IdentityProvider,
{
    query: Arc<Q>,
    identity: Arc<I>,
}

impl<Q, I> TaskBoardService<Q, I>
where
    Q: TaskBoardQuery,
    I: IdentityProvider,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(query: Arc<Q>, identity: Arc<I>) -> Self {
        Self { query, identity }
    }

    /// Returns every task with its assignee, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Identity`] when nobody is signed in or
    /// [`TaskBoardError::Query`] when the join fails.
    pub async fn list_board(&self) -> TaskBoardResult<Vec<TaskBoardEntry>> {
        let actor = self.identity.current_actor().await?;
        let entries = self.query.list_board().await?;
        debug!(actor = %actor.id(), entries = entries.len(), "task board loaded");
        Ok(entries)
    }

    /// Returns the dashboard counters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Identity`] when nobody is signed in or
    /// [`TaskBoardError::Query`] when counting fails.
    pub async fn dashboard_stats(&self) -> TaskBoardResult<DashboardStats> {
        let actor = self.identity.current_actor().await?;
        let stats = self.query.dashboard_stats().await?;
        debug!(
            actor = %actor.id(),
            total_staff = stats.total_staff,
            active_tasks = stats.active_tasks,
            pending_reviews = stats.pending_reviews,
            "dashboard stats loaded"
        );
        Ok(stats)
    }
}
