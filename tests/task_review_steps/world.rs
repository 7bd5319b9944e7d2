//! Shared world state for task proof review BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use staffnet::staff::{
    adapters::memory::{InMemoryStaffRepository, SessionIdentityProvider},
    domain::Actor,
};
use staffnet::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryStaffRepository,
    SessionIdentityProvider,
    DefaultClock,
>;

/// Scenario world for task review behaviour tests.
pub struct TaskReviewWorld {
    pub session: SessionIdentityProvider,
    pub staff: Arc<InMemoryStaffRepository>,
    pub service: TestTaskService,
    pub members: HashMap<String, Actor>,
    pub task_id: Option<TaskId>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskReviewWorld {
    /// Creates a world with no staff and no task.
    #[must_use]
    pub fn new() -> Self {
        let session = SessionIdentityProvider::new();
        let staff = Arc::new(InMemoryStaffRepository::new());
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&staff),
            Arc::new(session.clone()),
            Arc::new(DefaultClock),
        );

        Self {
            session,
            staff,
            service,
            members: HashMap::new(),
            task_id: None,
            last_result: None,
        }
    }

    /// Signs in the staff member registered under `name`.
    pub fn act_as(&self, name: &str) -> eyre::Result<Actor> {
        let actor = self.member(name)?;
        self.session.sign_in(actor)?;
        Ok(actor)
    }

    /// Returns the actor registered under `name` without signing in.
    pub fn member(&self, name: &str) -> eyre::Result<Actor> {
        self.members
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown staff member {name} in scenario world"))
    }

    /// Returns the identifier of the scenario task.
    pub fn task_id(&self) -> eyre::Result<TaskId> {
        self.task_id
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Reloads the scenario task from the repository.
    pub fn stored_task(&self) -> eyre::Result<Task> {
        let task_id = self.task_id()?;
        run_async(self.service.find_by_id(task_id))?
            .ok_or_else(|| eyre::eyre!("task {task_id} is missing from the repository"))
    }
}

impl Default for TaskReviewWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskReviewWorld {
    TaskReviewWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
