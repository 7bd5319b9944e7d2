//! Change notifications emitted by the task lifecycle service.

use crate::task::domain::{Task, TaskId};

/// Two-phase change notification for other viewers of the task board.
///
/// Every successful domain transition first emits [`TaskEvent::Tentative`];
/// it is then followed by exactly one of [`TaskEvent::Confirmed`] or
/// [`TaskEvent::RolledBack`] once the store has answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    /// The change is applied locally but not yet persisted.
    Tentative(Task),
    /// The change was persisted.
    Confirmed(Task),
    /// Persisting failed; viewers should revert to `restored`.
    RolledBack {
        /// Task whose change was discarded.
        task_id: TaskId,
        /// Last confirmed value, or `None` when a creation was discarded.
        restored: Option<Task>,
    },
}

impl TaskEvent {
    /// Returns the identifier of the task the event concerns.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        match self {
            Self::Tentative(task) | Self::Confirmed(task) => task.id(),
            Self::RolledBack { task_id, .. } => *task_id,
        }
    }
}
