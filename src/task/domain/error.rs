//! Error types for task domain validation and parsing.

use super::{ProofStatus, TaskId, TaskStatus};
use crate::staff::domain::StaffId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle operations that can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOperation {
    /// Creating a task.
    Create,
    /// Moving a task from `Todo` to `InProgress`.
    StartWork,
    /// Submitting proof of work for review.
    SubmitProof,
    /// Approving or rejecting submitted proof.
    Review,
    /// Assigning the task to another staff member.
    Reassign,
    /// Editing title, description, due date or priority.
    UpdateDetails,
}

impl TaskOperation {
    /// Returns a stable name for logs and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::StartWork => "start_work",
            Self::SubmitProof => "submit_proof",
            Self::Review => "review",
            Self::Reassign => "reassign",
            Self::UpdateDetails => "update_details",
        }
    }
}

impl fmt::Display for TaskOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The proof-of-work link is empty after trimming.
    #[error("proof link must not be empty")]
    EmptyProofLink,

    /// The actor lacks the role or ownership the operation requires.
    #[error("staff member {actor_id} is not allowed to {operation}")]
    Unauthorized {
        /// The rejected actor.
        actor_id: StaffId,
        /// The attempted operation.
        operation: TaskOperation,
    },

    /// The operation is not legal from the task's current state.
    #[error("cannot {operation} task {task_id} in state ({status}, {proof_status})")]
    InvalidState {
        /// The task identifier.
        task_id: TaskId,
        /// The attempted operation.
        operation: TaskOperation,
        /// Current task status.
        status: TaskStatus,
        /// Current proof status.
        proof_status: ProofStatus,
    },

    /// Persisted status, proof status and proof link contradict each other.
    #[error("task {task_id} has inconsistent lifecycle ({status}, {proof_status})")]
    InconsistentLifecycle {
        /// The task identifier.
        task_id: TaskId,
        /// Persisted task status.
        status: TaskStatus,
        /// Persisted proof status.
        proof_status: ProofStatus,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing proof statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown proof status: {0}")]
pub struct ParseProofStatusError(pub String);

/// Error returned while parsing review decisions from input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown review decision: {0}, expected approved or rejected")]
pub struct ParseReviewDecisionError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
