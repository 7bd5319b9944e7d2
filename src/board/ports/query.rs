//! Read port joining tasks with their assignees.

use crate::board::domain::{DashboardStats, TaskBoardEntry};
use crate::staff::ports::StaffRepositoryError;
use crate::task::ports::TaskRepositoryError;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board queries.
pub type BoardQueryResult<T> = Result<T, BoardQueryError>;

/// Task board query contract.
#[async_trait]
pub trait TaskBoardQuery: Send + Sync {
    /// Returns every task with its assignee, newest task first.
    async fn list_board(&self) -> BoardQueryResult<Vec<TaskBoardEntry>>;

    /// Returns the dashboard counters.
    async fn dashboard_stats(&self) -> BoardQueryResult<DashboardStats>;
}

/// Errors returned by board query implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardQueryError {
    /// Reading task records failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// Reading staff records failed.
    #[error(transparent)]
    Staff(#[from] StaffRepositoryError),

    /// Persistence-layer failure outside either repository.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardQueryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
