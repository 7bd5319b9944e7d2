//! Service layer enforcing role-gated task lifecycle transitions.

use super::requests::{
    CreateTaskRequest, ReassignTaskRequest, ReviewTaskRequest, SubmitProofRequest,
    UpdateTaskDetailsRequest,
};
use crate::notify::{NoopNotifier, Notifier};
use crate::staff::{
    domain::{Actor, StaffId},
    ports::{IdentityError, IdentityProvider, StaffRepository, StaffRepositoryError},
};
use crate::task::{
    domain::{ProofUrl, Task, TaskDomainError, TaskId, TaskOperation},
    ports::{TaskEvent, TaskRepository, TaskRepositoryError},
};
use crate::tentative::TentativeUpdate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or a lifecycle rule rejected the operation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The current actor could not be resolved.
    #[error(transparent)]
    Identity(#[from] IdentityError),
    /// The staff directory lookup for the assignee failed.
    #[error(transparent)]
    Staff(#[from] StaffRepositoryError),
    /// The assignee is not in the staff directory.
    #[error("cannot assign a task to unknown staff member {0}")]
    UnknownAssignee(StaffId),
    /// The assignee is banned.
    #[error("cannot assign a task to banned staff member {0}")]
    AssigneeBanned(StaffId),
}

impl TaskLifecycleError {
    /// Returns `true` when the actor lacked the required role or ownership.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Domain(TaskDomainError::Unauthorized { .. }))
    }

    /// Returns `true` when the transition is illegal from the current state.
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::Domain(TaskDomainError::InvalidState { .. }))
    }

    /// Returns `true` when the requested assignee cannot receive tasks.
    #[must_use]
    pub const fn is_unassignable(&self) -> bool {
        matches!(self, Self::UnknownAssignee(_) | Self::AssigneeBanned(_))
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Each mutation resolves the current actor, loads the task, applies the
/// domain transition to a copy and only then writes it back. Assignees are
/// looked up in the staff directory on create and reassign. The service
/// performs no locking of its own.
#[derive(Clone)]
pub struct TaskLifecycleService<R, S, I, C>
where
    R: TaskRepository,
    S: StaffRepository,
    I: IdentityProvider,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    staff: Arc<S>,
    identity: Arc<I>,
    clock: Arc<C>,
    notifier: Arc<dyn Notifier<TaskEvent>>,
}

impl<R, S, I, C> TaskLifecycleService<R, S, I, C>
where
    R: TaskRepository,
    S: StaffRepository,
    I: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service that publishes no events.
    #[must_use]
    pub fn new(repository: Arc<R>, staff: Arc<S>, identity: Arc<I>, clock: Arc<C>) -> Self {
        Self {
            repository,
            staff,
            identity,
            clock,
            notifier: Arc::new(NoopNotifier),
        }
    }

    /// Publishes change events to `notifier`.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier<TaskEvent>>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Creates a task in `(Todo, None)`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for a blank title,
    /// [`TaskDomainError::Unauthorized`] unless the actor is a manager or
    /// admin, [`TaskLifecycleError::UnknownAssignee`] or
    /// [`TaskLifecycleError::AssigneeBanned`] when the assignee cannot take
    /// work, or the repository error when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let draft = request.into_draft()?;
        let actor = self.identity.current_actor().await?;
        if !actor.can_manage_tasks() {
            warn!(actor = %actor.id(), "rejected task creation by non-manager");
            return Err(TaskDomainError::Unauthorized {
                actor_id: actor.id(),
                operation: TaskOperation::Create,
            }
            .into());
        }
        self.require_assignable(draft.assigned_to).await?;

        let task = Task::new(draft, &*self.clock);
        self.commit(&actor, TaskOperation::Create, TentativeUpdate::inserting(task))
            .await
    }

    /// Moves a `Todo` task to `InProgress`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the actor is neither the assignee
    /// nor a manager/admin, the task is not `(Todo, None)`, the task does not
    /// exist, or persistence fails.
    pub async fn start_work(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.apply(task_id, TaskOperation::StartWork, |task, actor, clock| {
            task.start_work(actor, clock)
        })
        .await
    }

    /// Submits proof of work on behalf of the task's assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyProofLink`] for a blank link,
    /// [`TaskDomainError::Unauthorized`] when the actor is not the assignee,
    /// [`TaskDomainError::InvalidState`] when proof is already pending or the
    /// task is done, or the repository error.
    pub async fn submit_proof(&self, request: SubmitProofRequest) -> TaskLifecycleResult<Task> {
        let link = ProofUrl::new(request.link)?;
        self.apply(
            request.task_id,
            TaskOperation::SubmitProof,
            |task, actor, clock| task.submit_proof(actor, link, clock),
        )
        .await
    }

    /// Approves or rejects the pending proof of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Unauthorized`] unless the actor is a
    /// manager or admin, [`TaskDomainError::InvalidState`] when no proof is
    /// pending, or the repository error.
    pub async fn review(&self, request: ReviewTaskRequest) -> TaskLifecycleResult<Task> {
        let decision = request.decision;
        self.apply(request.task_id, TaskOperation::Review, |task, actor, clock| {
            task.review(actor, decision, clock)
        })
        .await
    }

    /// Assigns a task to another staff member.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownAssignee`] or
    /// [`TaskLifecycleError::AssigneeBanned`] when the new assignee cannot
    /// take work, [`TaskDomainError::Unauthorized`] unless the actor is a
    /// manager or admin, [`TaskDomainError::InvalidState`] while proof is
    /// under review or once done, or the repository error.
    pub async fn reassign(&self, request: ReassignTaskRequest) -> TaskLifecycleResult<Task> {
        let assignee = request.assignee;
        self.require_assignable(assignee).await?;
        self.apply(
            request.task_id,
            TaskOperation::Reassign,
            |task, actor, clock| task.reassign(actor, assignee, clock),
        )
        .await
    }

    /// Edits title, description, due date or priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for a blank replacement title,
    /// [`TaskDomainError::Unauthorized`] unless the actor is a manager or
    /// admin, [`TaskDomainError::InvalidState`] once the task is done, or the
    /// repository error.
    pub async fn update_details(
        &self,
        request: UpdateTaskDetailsRequest,
    ) -> TaskLifecycleResult<Task> {
        let task_id = request.task_id();
        let update = request.into_update()?;
        self.apply(
            task_id,
            TaskOperation::UpdateDetails,
            |task, actor, clock| task.update_details(actor, update, clock),
        )
        .await
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, task_id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        debug!(task_id = %task_id, "looking up task");
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Returns every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn list_all(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns the tasks assigned to `assignee`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn list_assigned_to(&self, assignee: StaffId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_by_assignee(assignee).await?)
    }

    /// Returns the tasks assigned to the current actor, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Identity`] when no actor can be resolved
    /// or [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn list_mine(&self) -> TaskLifecycleResult<Vec<Task>> {
        let actor = self.identity.current_actor().await?;
        self.list_assigned_to(actor.id()).await
    }

    async fn require_assignable(&self, assignee: StaffId) -> TaskLifecycleResult<()> {
        let Some(member) = self.staff.find_by_id(assignee).await? else {
            warn!(assignee = %assignee, "rejected assignment to unknown staff member");
            return Err(TaskLifecycleError::UnknownAssignee(assignee));
        };
        if member.is_banned() {
            warn!(assignee = %assignee, "rejected assignment to banned staff member");
            return Err(TaskLifecycleError::AssigneeBanned(assignee));
        }
        Ok(())
    }

    async fn apply<F>(
        &self,
        task_id: TaskId,
        operation: TaskOperation,
        mutate: F,
    ) -> TaskLifecycleResult<Task>
    where
        F: FnOnce(&mut Task, &Actor, &C) -> Result<(), TaskDomainError> + Send,
    {
        let actor = self.identity.current_actor().await?;
        let current = self
            .repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(task_id))?;

        let mut changed = current.clone();
        if let Err(err) = mutate(&mut changed, &actor, &*self.clock) {
            warn!(
                task_id = %task_id,
                actor = %actor.id(),
                operation = %operation,
                error = %err,
                "task lifecycle change rejected"
            );
            return Err(err.into());
        }

        self.commit(&actor, operation, TentativeUpdate::replacing(current, changed))
            .await
    }

    async fn commit(
        &self,
        actor: &Actor,
        operation: TaskOperation,
        pending: TentativeUpdate<Task>,
    ) -> TaskLifecycleResult<Task> {
        self.notifier
            .notify(TaskEvent::Tentative(pending.tentative().clone()));

        let write = if pending.confirmed().is_some() {
            self.repository.update(pending.tentative()).await
        } else {
            self.repository.store(pending.tentative()).await
        };

        match write {
            Ok(()) => {
                let persisted = pending.confirm();
                info!(
                    task_id = %persisted.id(),
                    actor = %actor.id(),
                    operation = %operation,
                    status = %persisted.status(),
                    proof_status = %persisted.proof_status(),
                    "task lifecycle change persisted"
                );
                self.notifier.notify(TaskEvent::Confirmed(persisted.clone()));
                Ok(persisted)
            }
            Err(err) => {
                let task_id = pending.tentative().id();
                let restored = pending.roll_back();
                warn!(
                    task_id = %task_id,
                    operation = %operation,
                    error = %err,
                    "task lifecycle change rolled back"
                );
                self.notifier
                    .notify(TaskEvent::RolledBack { task_id, restored });
                Err(err.into())
            }
        }
    }
}
