//! Validated descriptive values and parameter objects for tasks.

use super::{TaskDomainError, TaskPriority};
use crate::staff::domain::StaffId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the trimmed value is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Proof-of-work link submitted by a task's assignee.
///
/// # Examples
///
/// ```
/// use staffnet::task::domain::ProofUrl;
///
/// let proof = ProofUrl::new("  https://drive.example/demo  ").expect("valid");
/// assert_eq!(proof.as_str(), "https://drive.example/demo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ProofUrl(String);

impl ProofUrl {
    /// Creates a validated proof link.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyProofLink`] when the trimmed value is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyProofLink);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the link as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProofUrl {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ProofUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameter object describing a task to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Task title.
    pub title: TaskTitle,
    /// Optional longer description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Board priority.
    pub priority: TaskPriority,
    /// Staff member the task is assigned to.
    pub assigned_to: StaffId,
}

impl TaskDraft {
    /// Creates a draft with default priority and no description or due date.
    #[must_use]
    pub fn new(title: TaskTitle, assigned_to: StaffId) -> Self {
        Self {
            title,
            description: None,
            due_date: None,
            priority: TaskPriority::default(),
            assigned_to,
        }
    }
}

/// Partial update of a task's descriptive fields.
///
/// Fields left untouched keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDetailsUpdate {
    title: Option<TaskTitle>,
    description: Option<Option<String>>,
    due_date: Option<Option<NaiveDate>>,
    priority: Option<TaskPriority>,
}

impl TaskDetailsUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
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

    /// Returns `true` when the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
    }

    pub(super) fn into_parts(
        self,
    ) -> (
        Option<TaskTitle>,
        Option<Option<String>>,
        Option<Option<NaiveDate>>,
        Option<TaskPriority>,
    ) {
        (self.title, self.description, self.due_date, self.priority)
    }
}
