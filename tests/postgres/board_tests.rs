//! Board join and dashboard counters over `PostgreSQL`.

use super::helpers::{TestSchema, member};
use eyre::ensure;
use mockable::DefaultClock;
use staffnet::board::{
    adapters::postgres::PostgresTaskBoard, domain::DashboardStats, ports::TaskBoardQuery,
};
use staffnet::staff::{
    adapters::postgres::PostgresStaffRepository, domain::AccessLevel, ports::StaffRepository,
};
use staffnet::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{ProofUrl, Task, TaskDraft, TaskTitle},
    ports::TaskRepository,
};

#[tokio::test(flavor = "multi_thread")]
async fn board_keeps_tasks_of_removed_staff() -> eyre::Result<()> {
    let schema = TestSchema::create().await?;
    let staff = PostgresStaffRepository::new(schema.pool.clone());
    let tasks = PostgresTaskRepository::new(schema.pool.clone());
    let board = PostgresTaskBoard::new(schema.pool.clone());

    let sam = member("Sam Staff", "sam@staffnet.test", AccessLevel::Staff)?;
    let riley = member("Riley Staff", "riley@staffnet.test", AccessLevel::Staff)?;
    staff.store(&sam).await?;
    staff.store(&riley).await?;

    let kept = Task::new(
        TaskDraft::new(TaskTitle::new("Sweep the yard")?, sam.id()),
        &DefaultClock,
    );
    let orphaned = Task::new(
        TaskDraft::new(TaskTitle::new("Fix the gate")?, riley.id()),
        &DefaultClock,
    );
    tasks.store(&kept).await?;
    tasks.store(&orphaned).await?;
    staff.remove(riley.id()).await?;

    let entries = board.list_board().await?;
    ensure!(entries.len() == 2, "expected two entries, got {}", entries.len());
    for entry in &entries {
        let assignee = entry.assignee().map(|found| found.id());
        if entry.task().id() == kept.id() {
            ensure!(assignee == Some(sam.id()), "kept task lost its assignee");
        } else {
            ensure!(assignee.is_none(), "removed assignee should not resolve");
        }
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn dashboard_counts_open_and_pending_tasks() -> eyre::Result<()> {
    let schema = TestSchema::create().await?;
    let staff = PostgresStaffRepository::new(schema.pool.clone());
    let tasks = PostgresTaskRepository::new(schema.pool.clone());
    let board = PostgresTaskBoard::new(schema.pool.clone());

    let sam = member("Sam Staff", "sam@staffnet.test", AccessLevel::Staff)?;
    let mut banned = member("Bo Banned", "bo@staffnet.test", AccessLevel::Staff)?;
    banned.ban(&DefaultClock);
    staff.store(&sam).await?;
    staff.store(&banned).await?;

    let sam_actor = sam
        .as_actor()
        .ok_or_else(|| eyre::eyre!("sam should be active"))?;
    let open = Task::new(
        TaskDraft::new(TaskTitle::new("Sweep the yard")?, sam.id()),
        &DefaultClock,
    );
    let mut pending = Task::new(
        TaskDraft::new(TaskTitle::new("Fix the gate")?, sam.id()),
        &DefaultClock,
    );
    pending.submit_proof(
        &sam_actor,
        ProofUrl::new("https://proof.test/gate")?,
        &DefaultClock,
    )?;
    tasks.store(&open).await?;
    tasks.store(&pending).await?;

    let stats = board.dashboard_stats().await?;
    ensure!(
        stats
            == DashboardStats {
                total_staff: 2,
                active_tasks: 2,
                pending_reviews: 1,
            },
        "unexpected stats {stats:?}"
    );
    Ok(())
}
