//! Task aggregate root and its lifecycle transitions.

use super::{
    ProofStatus, ProofUrl, ReviewDecision, TaskDetailsUpdate, TaskDomainError, TaskDraft, TaskId,
    TaskOperation, TaskPriority, TaskStatus, TaskTitle,
};
use crate::staff::domain::{Actor, StaffId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// `(status, proof_status)` is always one of `(Todo, None)`,
/// `(InProgress, None)`, `(InProgress, Rejected)`, `(Review, Pending)` or
/// `(Done, Approved)`, and a proof link is present whenever the proof status
/// is not `None`. Deserialization goes through [`Task::from_persisted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedTaskData")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    priority: TaskPriority,
    assigned_to: StaffId,
    status: TaskStatus,
    proof_url: Option<ProofUrl>,
    proof_status: ProofStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted due date.
    pub due_date: Option<NaiveDate>,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted assignee.
    pub assigned_to: StaffId,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted proof link, if any.
    pub proof_url: Option<ProofUrl>,
    /// Persisted proof status.
    pub proof_status: ProofStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PersistedTaskData> for Task {
    type Error = TaskDomainError;

    fn try_from(data: PersistedTaskData) -> Result<Self, Self::Error> {
        Self::from_persisted(data)
    }
}

impl Task {
    /// Creates a new task in `(Todo, None)` with no proof.
    #[must_use]
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority,
            assigned_to: draft.assigned_to,
            status: TaskStatus::Todo,
            proof_url: None,
            proof_status: ProofStatus::None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InconsistentLifecycle`] when the persisted
    /// status, proof status and proof link do not form a reachable state.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TaskDomainError> {
        if !is_consistent(data.status, data.proof_status, data.proof_url.is_some()) {
            return Err(TaskDomainError::InconsistentLifecycle {
                task_id: data.id,
                status: data.status,
                proof_status: data.proof_status,
            });
        }

        Ok(Self {
            id: data.id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            priority: data.priority,
            assigned_to: data.assigned_to,
            status: data.status,
            proof_url: data.proof_url,
            proof_status: data.proof_status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assigned_to(&self) -> StaffId {
        self.assigned_to
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the submitted proof link, if any.
    ///
    /// The link is kept after a rejection so reviewers can see what was
    /// turned down.
    #[must_use]
    pub const fn proof_url(&self) -> Option<&ProofUrl> {
        self.proof_url.as_ref()
    }

    /// Returns the proof status.
    #[must_use]
    pub const fn proof_status(&self) -> ProofStatus {
        self.proof_status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves a `Todo` task to `InProgress`.
    ///
    /// The assignee or any manager/admin may start work.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Unauthorized`] for other actors and
    /// [`TaskDomainError::InvalidState`] unless the task is `(Todo, None)`.
    pub fn start_work(&mut self, actor: &Actor, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let operation = TaskOperation::StartWork;
        if actor.id() != self.assigned_to && !actor.can_manage_tasks() {
            return Err(unauthorized(actor, operation));
        }
        if (self.status, self.proof_status) != (TaskStatus::Todo, ProofStatus::None) {
            return Err(self.invalid_state(operation));
        }

        self.status = TaskStatus::InProgress;
        self.touch(clock);
        Ok(())
    }

    /// Submits proof of work, moving the task to `(Review, Pending)`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Unauthorized`] when the actor is not the
    /// assignee and [`TaskDomainError::InvalidState`] when a submission is
    /// already pending or the task is done.
    pub fn submit_proof(
        &mut self,
        actor: &Actor,
        link: ProofUrl,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let operation = TaskOperation::SubmitProof;
        if actor.id() != self.assigned_to {
            return Err(unauthorized(actor, operation));
        }
        let may_submit = matches!(
            (self.status, self.proof_status),
            (TaskStatus::Todo, ProofStatus::None)
                | (TaskStatus::InProgress, ProofStatus::None | ProofStatus::Rejected)
        );
        if !may_submit {
            return Err(self.invalid_state(operation));
        }

        self.proof_url = Some(link);
        self.proof_status = ProofStatus::Pending;
        self.status = TaskStatus::Review;
        self.touch(clock);
        Ok(())
    }

    /// Approves or rejects pending proof.
    ///
    /// Approval completes the task; rejection returns it to `InProgress`
    /// with the rejected link retained.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Unauthorized`] when the actor is neither a
    /// manager nor an admin (whatever the task state) and
    /// [`TaskDomainError::InvalidState`] when no proof is pending.
    pub fn review(
        &mut self,
        actor: &Actor,
        decision: ReviewDecision,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let operation = TaskOperation::Review;
        if !actor.can_manage_tasks() {
            return Err(unauthorized(actor, operation));
        }
        if self.proof_status != ProofStatus::Pending {
            return Err(self.invalid_state(operation));
        }

        let (status, proof_status) = decision.outcome();
        self.status = status;
        self.proof_status = proof_status;
        self.touch(clock);
        Ok(())
    }

    /// Assigns the task to another staff member.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Unauthorized`] unless the actor is a
    /// manager or admin, and [`TaskDomainError::InvalidState`] while proof
    /// is under review or once the task is done.
    pub fn reassign(
        &mut self,
        actor: &Actor,
        assignee: StaffId,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let operation = TaskOperation::Reassign;
        if !actor.can_manage_tasks() {
            return Err(unauthorized(actor, operation));
        }
        if matches!(self.status, TaskStatus::Review | TaskStatus::Done) {
            return Err(self.invalid_state(operation));
        }

        self.assigned_to = assignee;
        self.touch(clock);
        Ok(())
    }

    /// Applies changes to the descriptive fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Unauthorized`] unless the actor is a
    /// manager or admin, and [`TaskDomainError::InvalidState`] once the task
    /// is done.
    pub fn update_details(
        &mut self,
        actor: &Actor,
        update: TaskDetailsUpdate,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let operation = TaskOperation::UpdateDetails;
        if !actor.can_manage_tasks() {
            return Err(unauthorized(actor, operation));
        }
        if self.status.is_terminal() {
            return Err(self.invalid_state(operation));
        }
        if update.is_empty() {
            return Ok(());
        }

        let (title, description, due_date, priority) = update.into_parts();
        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(new_due_date) = due_date {
            self.due_date = new_due_date;
        }
        if let Some(new_priority) = priority {
            self.priority = new_priority;
        }
        self.touch(clock);
        Ok(())
    }

    const fn invalid_state(&self, operation: TaskOperation) -> TaskDomainError {
        TaskDomainError::InvalidState {
            task_id: self.id,
            operation,
            status: self.status,
            proof_status: self.proof_status,
        }
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

const fn unauthorized(actor: &Actor, operation: TaskOperation) -> TaskDomainError {
    TaskDomainError::Unauthorized {
        actor_id: actor.id(),
        operation,
    }
}

const fn is_consistent(status: TaskStatus, proof_status: ProofStatus, has_proof: bool) -> bool {
    let reachable = matches!(
        (status, proof_status),
        (TaskStatus::Todo, ProofStatus::None)
            | (TaskStatus::InProgress, ProofStatus::None | ProofStatus::Rejected)
            | (TaskStatus::Review, ProofStatus::Pending)
            | (TaskStatus::Done, ProofStatus::Approved)
    );
    let proof_required = !matches!(proof_status, ProofStatus::None);
    reachable && (has_proof || !proof_required)
}
