//! End-to-end task flow across the directory, lifecycle and board services.

use super::helpers::{Office, office};
use eyre::{bail, ensure};
use rstest::rstest;
use staffnet::board::domain::DashboardStats;
use staffnet::staff::domain::AccessLevel;
use staffnet::task::{
    domain::{ProofStatus, ReviewDecision, TaskPriority, TaskStatus},
    services::{
        CreateTaskRequest, ReassignTaskRequest, ReviewTaskRequest, SubmitProofRequest,
        TaskLifecycleError,
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn proof_is_rejected_resubmitted_and_approved(office: Office) -> eyre::Result<()> {
    office.open().await?;
    let manager = office
        .hire("Mina Manager", "mina@staffnet.test", AccessLevel::Manager)
        .await?;
    let worker = office
        .hire("Sam Staff", "sam@staffnet.test", AccessLevel::Staff)
        .await?;

    office.act_as(&manager)?;
    let task = office
        .tasks
        .create(
            CreateTaskRequest::new("Restock the first aid kit", worker.id())
                .with_priority(TaskPriority::High),
        )
        .await?;

    office.act_as(&worker)?;
    office.tasks.start_work(task.id()).await?;
    office
        .tasks
        .submit_proof(SubmitProofRequest::new(task.id(), "https://proof.test/kit-1"))
        .await?;

    office.act_as(&manager)?;
    let rejected = office
        .tasks
        .review(ReviewTaskRequest::new(task.id(), ReviewDecision::Rejected))
        .await?;
    ensure!(rejected.status() == TaskStatus::InProgress);
    ensure!(rejected.proof_status() == ProofStatus::Rejected);

    office.act_as(&worker)?;
    office
        .tasks
        .submit_proof(SubmitProofRequest::new(task.id(), "https://proof.test/kit-2"))
        .await?;

    office.act_as(&manager)?;
    let approved = office
        .tasks
        .review(ReviewTaskRequest::new(task.id(), ReviewDecision::Approved))
        .await?;
    ensure!(approved.status() == TaskStatus::Done);
    ensure!(approved.proof_status() == ProofStatus::Approved);
    ensure!(
        approved.proof_url().map(|url| url.as_str()) == Some("https://proof.test/kit-2"),
        "latest proof link should be kept"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn staff_cannot_review_their_own_proof(office: Office) -> eyre::Result<()> {
    office.open().await?;
    let worker = office
        .hire("Sam Staff", "sam@staffnet.test", AccessLevel::Staff)
        .await?;
    let task = office
        .tasks
        .create(CreateTaskRequest::new("File timesheets", worker.id()))
        .await?;

    office.act_as(&worker)?;
    office
        .tasks
        .submit_proof(SubmitProofRequest::new(task.id(), "https://proof.test/sheet"))
        .await?;
    let result = office
        .tasks
        .review(ReviewTaskRequest::new(task.id(), ReviewDecision::Approved))
        .await;

    match result {
        Err(ref err) if err.is_unauthorized() => {}
        other => bail!("expected unauthorized review, got {other:?}"),
    }
    let stored = office
        .tasks
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task disappeared"))?;
    ensure!(stored.status() == TaskStatus::Review);
    ensure!(stored.proof_status() == ProofStatus::Pending);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_joins_assignees_and_counts_open_work(office: Office) -> eyre::Result<()> {
    let admin = office.open().await?;
    let worker = office
        .hire("Sam Staff", "sam@staffnet.test", AccessLevel::Staff)
        .await?;

    let kit = office
        .tasks
        .create(CreateTaskRequest::new("Restock the first aid kit", worker.id()))
        .await?;
    office
        .tasks
        .create(CreateTaskRequest::new("Order paper", admin.id()))
        .await?;

    office.act_as(&worker)?;
    office
        .tasks
        .submit_proof(SubmitProofRequest::new(kit.id(), "https://proof.test/kit"))
        .await?;

    let board = office.board.list_board().await?;
    ensure!(board.len() == 2, "expected two board entries, got {}", board.len());
    let kit_entry = board
        .iter()
        .find(|entry| entry.task().id() == kit.id())
        .ok_or_else(|| eyre::eyre!("kit task missing from board"))?;
    ensure!(kit_entry.assignee().map(|member| member.id()) == Some(worker.id()));

    let stats = office.board.dashboard_stats().await?;
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

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_assignee_leaves_task_on_board(office: Office) -> eyre::Result<()> {
    office.open().await?;
    let worker = office
        .hire("Sam Staff", "sam@staffnet.test", AccessLevel::Staff)
        .await?;
    let task = office
        .tasks
        .create(CreateTaskRequest::new("Water the plants", worker.id()))
        .await?;

    office.admin.remove_staff(worker.id()).await?;

    let board = office.board.list_board().await?;
    let entry = board
        .iter()
        .find(|entry| entry.task().id() == task.id())
        .ok_or_else(|| eyre::eyre!("task missing from board"))?;
    ensure!(entry.assignee().is_none(), "removed assignee should not resolve");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signed_out_session_cannot_create_tasks(office: Office) -> eyre::Result<()> {
    let admin = office.open().await?;
    office.session.sign_out()?;

    let result = office
        .tasks
        .create(CreateTaskRequest::new("Sneaky task", admin.id()))
        .await;

    ensure!(
        matches!(result, Err(TaskLifecycleError::Identity(_))),
        "expected identity error, got {result:?}"
    );
    ensure!(office.tasks.list_all().await?.is_empty(), "no task should be stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn banned_or_removed_staff_cannot_take_work(office: Office) -> eyre::Result<()> {
    office.open().await?;
    let worker = office
        .hire("Sam Staff", "sam@staffnet.test", AccessLevel::Staff)
        .await?;
    let leaver = office
        .hire("Lee Leaver", "lee@staffnet.test", AccessLevel::Staff)
        .await?;
    let task = office
        .tasks
        .create(CreateTaskRequest::new("Sort the post", worker.id()))
        .await?;

    office.admin.ban(worker.id()).await?;
    office.admin.remove_staff(leaver.id()).await?;

    let to_banned = office
        .tasks
        .create(CreateTaskRequest::new("Lock up", worker.id()))
        .await;
    ensure!(
        matches!(to_banned, Err(TaskLifecycleError::AssigneeBanned(id)) if id == worker.id()),
        "expected banned assignee, got {to_banned:?}"
    );

    let to_removed = office
        .tasks
        .reassign(ReassignTaskRequest::new(task.id(), leaver.id()))
        .await;
    ensure!(
        matches!(to_removed, Err(TaskLifecycleError::UnknownAssignee(id)) if id == leaver.id()),
        "expected unknown assignee, got {to_removed:?}"
    );
    ensure!(office.tasks.list_all().await?.len() == 1);
    Ok(())
}
