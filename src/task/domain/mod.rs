//! Domain model for task lifecycle management.
//!
//! A task moves through `Todo → InProgress → Review → Done`, with review
//! rejections sending it back to `InProgress`. Status and proof status are
//! kept in lock-step by the aggregate; infrastructure concerns stay outside
//! the domain boundary.

mod details;
mod error;
mod ids;
mod status;
mod task;

pub use details::{ProofUrl, TaskDetailsUpdate, TaskDraft, TaskTitle};
pub use error::{
    ParseProofStatusError, ParseReviewDecisionError, ParseTaskPriorityError, ParseTaskStatusError,
    TaskDomainError, TaskOperation,
};
pub use ids::TaskId;
pub use status::{ProofStatus, ReviewDecision, TaskPriority, TaskStatus};
pub use task::{PersistedTaskData, Task};
