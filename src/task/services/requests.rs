//! Request payloads accepted by [`super::TaskLifecycleService`].

use crate::staff::domain::StaffId;
use crate::task::domain::{
    ReviewDecision, TaskDetailsUpdate, TaskDomainError, TaskDraft, TaskId, TaskPriority,
    TaskTitle,
};
use chrono::NaiveDate;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    priority: TaskPriority,
    assigned_to: StaffId,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(title: impl Into<String>, assigned_to: StaffId) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: TaskPriority::default(),
            assigned_to,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub(super) fn into_draft(self) -> Result<TaskDraft, TaskDomainError> {
        let mut draft = TaskDraft::new(TaskTitle::new(self.title)?, self.assigned_to);
        draft.description = self.description;
        draft.due_date = self.due_date;
        draft.priority = self.priority;
        Ok(draft)
    }
}

/// Request payload for submitting proof of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitProofRequest {
    pub(super) task_id: TaskId,
    pub(super) link: String,
}

impl SubmitProofRequest {
    /// Creates a request submitting `link` as proof for `task_id`.
    #[must_use]
    pub fn new(task_id: TaskId, link: impl Into<String>) -> Self {
        Self {
            task_id,
            link: link.into(),
        }
    }
}

/// Request payload for reviewing submitted proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewTaskRequest {
    pub(super) task_id: TaskId,
    pub(super) decision: ReviewDecision,
}

impl ReviewTaskRequest {
    /// Creates a review request.
    #[must_use]
    pub const fn new(task_id: TaskId, decision: ReviewDecision) -> Self {
        Self { task_id, decision }
    }
}

/// Request payload for assigning a task to another staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReassignTaskRequest {
    pub(super) task_id: TaskId,
    pub(super) assignee: StaffId,
}

impl ReassignTaskRequest {
    /// Creates a reassignment request.
    #[must_use]
    pub const fn new(task_id: TaskId, assignee: StaffId) -> Self {
        Self { task_id, assignee }
    }
}

/// Request payload for editing a task's descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskDetailsRequest {
    task_id: TaskId,
    title: Option<String>,
    description: Option<Option<String>>,
    due_date: Option<Option<NaiveDate>>,
    priority: Option<TaskPriority>,
}

impl UpdateTaskDetailsRequest {
    /// Creates a request that changes nothing yet.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            title: None,
            description: None,
            due_date: None,
            priority: None,
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Removes the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub(super) const fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub(super) fn into_update(self) -> Result<TaskDetailsUpdate, TaskDomainError> {
        let mut update = TaskDetailsUpdate::new();
        if let Some(title) = self.title {
            update = update.with_title(TaskTitle::new(title)?);
        }
        match self.description {
            Some(Some(description)) => update = update.with_description(description),
            Some(None) => update = update.clear_description(),
            None => {}
        }
        match self.due_date {
            Some(Some(due_date)) => update = update.with_due_date(due_date),
            Some(None) => update = update.clear_due_date(),
            None => {}
        }
        if let Some(priority) = self.priority {
            update = update.with_priority(priority);
        }
        Ok(update)
    }
}
