//! Tests for the in-memory board join and dashboard counters.

use std::sync::Arc;

use crate::board::{
    adapters::memory::InMemoryTaskBoard,
    domain::DashboardStats,
    services::{TaskBoardError, TaskBoardService},
};
use crate::staff::{
    adapters::memory::{InMemoryStaffRepository, SessionIdentityProvider},
    domain::{AccessLevel, Actor, EmailAddress, FullName, StaffId, StaffMember},
    ports::StaffRepository,
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{ProofUrl, ReviewDecision, Task, TaskDraft, TaskStatus, TaskTitle},
    ports::TaskRepository,
};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

struct Board {
    tasks: Arc<InMemoryTaskRepository>,
    staff: Arc<InMemoryStaffRepository>,
    service: TaskBoardService<InMemoryTaskBoard, SessionIdentityProvider>,
    session: SessionIdentityProvider,
}

#[fixture]
fn board() -> Board {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let staff = Arc::new(InMemoryStaffRepository::new());
    let session = SessionIdentityProvider::new();
    let service = TaskBoardService::new(
        Arc::new(InMemoryTaskBoard::new(Arc::clone(&tasks), Arc::clone(&staff))),
        Arc::new(session.clone()),
    );
    Board {
        tasks,
        staff,
        service,
        session,
    }
}

fn member(name: &str, email: &str, level: AccessLevel) -> eyre::Result<StaffMember> {
    Ok(StaffMember::new(
        FullName::new(name)?,
        EmailAddress::new(email)?,
        level,
        &DefaultClock,
    ))
}

fn task_for(title: &str, assignee: StaffId) -> eyre::Result<Task> {
    Ok(Task::new(
        TaskDraft::new(TaskTitle::new(title)?, assignee),
        &DefaultClock,
    ))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_joins_tasks_with_assignees(board: Board) -> eyre::Result<()> {
    let manager = member("Ray Holt", "holt@example.org", AccessLevel::Manager)?;
    let assignee = member("Amy Santiago", "amy@example.org", AccessLevel::Staff)?;
    board.staff.store(&manager).await?;
    board.staff.store(&assignee).await?;
    let assigned = task_for("Binder audit", assignee.id())?;
    board.tasks.store(&assigned).await?;
    board.session.sign_in(manager.as_actor().ok_or_else(|| eyre::eyre!("active"))?)?;

    let entries = board.service.list_board().await?;

    ensure!(entries.len() == 1);
    let entry = entries.first().ok_or_else(|| eyre::eyre!("missing entry"))?;
    ensure!(entry.task() == &assigned);
    ensure!(entry.assignee() == Some(&assignee));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_entry_without_staff_record_has_no_assignee(board: Board) -> eyre::Result<()> {
    let orphan = task_for("Orphaned chore", StaffId::new())?;
    board.tasks.store(&orphan).await?;
    board
        .session
        .sign_in(Actor::new(StaffId::new(), AccessLevel::Staff))?;

    let entries = board.service.list_board().await?;

    ensure!(entries.len() == 1);
    ensure!(entries.iter().all(|entry| entry.assignee().is_none()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_counts_exclude_done_tasks(board: Board) -> eyre::Result<()> {
    let manager = member("Ray Holt", "holt@example.org", AccessLevel::Manager)?;
    let assignee = member("Amy Santiago", "amy@example.org", AccessLevel::Staff)?;
    board.staff.store(&manager).await?;
    board.staff.store(&assignee).await?;
    let manager_actor = manager.as_actor().ok_or_else(|| eyre::eyre!("active"))?;
    let assignee_actor = assignee.as_actor().ok_or_else(|| eyre::eyre!("active"))?;

    let todo = task_for("Still to do", assignee.id())?;
    let mut in_review = task_for("Awaiting review", assignee.id())?;
    in_review.submit_proof(&assignee_actor, ProofUrl::new("http://x")?, &DefaultClock)?;
    let mut done = task_for("Finished", assignee.id())?;
    done.submit_proof(&assignee_actor, ProofUrl::new("http://y")?, &DefaultClock)?;
    done.review(&manager_actor, ReviewDecision::Approved, &DefaultClock)?;
    for task in [&todo, &in_review, &done] {
        board.tasks.store(task).await?;
    }
    board.session.sign_in(assignee_actor)?;

    let stats = board.service.dashboard_stats().await?;

    ensure!(
        stats
            == DashboardStats {
                total_staff: 2,
                active_tasks: 2,
                pending_reviews: 1,
            }
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_requires_signed_in_actor(board: Board) {
    let result = board.service.list_board().await;

    assert!(matches!(result, Err(TaskBoardError::Identity(_))));
}

#[rstest]
fn tally_counts_statuses() {
    let stats = DashboardStats::tally(
        3,
        [
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Review,
            TaskStatus::Review,
            TaskStatus::Done,
        ],
    );

    assert_eq!(stats.total_staff, 3);
    assert_eq!(stats.active_tasks, 4);
    assert_eq!(stats.pending_reviews, 2);
}
