//! Round-trip tests for the Diesel-backed repositories.

use super::helpers::{TestSchema, member};
use eyre::{bail, ensure};
use mockable::DefaultClock;
use staffnet::chat::{
    adapters::postgres::PostgresChatRepository,
    domain::{ChatMessage, MessageContent},
    ports::ChatRepository,
};
use staffnet::staff::{
    adapters::postgres::PostgresStaffRepository,
    domain::{AccessLevel, EmailAddress, StaffStatus},
    ports::{StaffRepository, StaffRepositoryError},
};
use staffnet::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{ProofStatus, ProofUrl, ReviewDecision, Task, TaskDraft, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};

#[tokio::test(flavor = "multi_thread")]
async fn staff_round_trip_and_email_uniqueness() -> eyre::Result<()> {
    let schema = TestSchema::create().await?;
    let repository = PostgresStaffRepository::new(schema.pool.clone());

    let mut mina = member("Mina Manager", "Mina@StaffNet.test", AccessLevel::Manager)?;
    repository.store(&mina).await?;

    let email = EmailAddress::new("mina@staffnet.test")?;
    let found = repository
        .find_by_email(&email)
        .await?
        .ok_or_else(|| eyre::eyre!("stored member not found by email"))?;
    ensure!(found.id() == mina.id());
    ensure!(found.access_level() == AccessLevel::Manager);

    let twin = member("Mina Twin", "mina@staffnet.test", AccessLevel::Staff)?;
    match repository.store(&twin).await {
        Err(StaffRepositoryError::DuplicateEmail(_)) => {}
        other => bail!("expected duplicate email, got {other:?}"),
    }

    mina.ban(&DefaultClock);
    repository.update(&mina).await?;
    let reloaded = repository
        .find_by_id(mina.id())
        .await?
        .ok_or_else(|| eyre::eyre!("member vanished after update"))?;
    ensure!(reloaded.status() == StaffStatus::Banned);

    repository.remove(mina.id()).await?;
    match repository.remove(mina.id()).await {
        Err(StaffRepositoryError::NotFound(id)) if id == mina.id() => {}
        other => bail!("expected not found, got {other:?}"),
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn task_updates_persist_proof_and_status() -> eyre::Result<()> {
    let schema = TestSchema::create().await?;
    let repository = PostgresTaskRepository::new(schema.pool.clone());
    let manager = member("Mina Manager", "mina@staffnet.test", AccessLevel::Manager)?;
    let worker = member("Sam Staff", "sam@staffnet.test", AccessLevel::Staff)?;
    let manager_actor = manager
        .as_actor()
        .ok_or_else(|| eyre::eyre!("manager should be active"))?;
    let worker_actor = worker
        .as_actor()
        .ok_or_else(|| eyre::eyre!("worker should be active"))?;

    let mut task = Task::new(
        TaskDraft::new(TaskTitle::new("Restock the first aid kit")?, worker.id()),
        &DefaultClock,
    );
    repository.store(&task).await?;
    match repository.store(&task).await {
        Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id() => {}
        other => bail!("expected duplicate task, got {other:?}"),
    }

    task.submit_proof(
        &worker_actor,
        ProofUrl::new("https://proof.test/kit")?,
        &DefaultClock,
    )?;
    task.review(&manager_actor, ReviewDecision::Rejected, &DefaultClock)?;
    repository.update(&task).await?;

    let stored = repository
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task not found after update"))?;
    ensure!(stored.status() == TaskStatus::InProgress);
    ensure!(stored.proof_status() == ProofStatus::Rejected);
    ensure!(stored.proof_url().map(ProofUrl::as_str) == Some("https://proof.test/kit"));

    let assigned = repository.list_by_assignee(worker.id()).await?;
    ensure!(assigned.len() == 1);
    ensure!(repository.list_by_assignee(manager.id()).await?.is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn chat_history_is_oldest_first_within_limit() -> eyre::Result<()> {
    let schema = TestSchema::create().await?;
    let repository = PostgresChatRepository::new(schema.pool.clone());
    let sender = member("Sam Staff", "sam@staffnet.test", AccessLevel::Staff)?;

    for text in ["first", "second", "third"] {
        let message = ChatMessage::new(sender.id(), MessageContent::new(text)?, &DefaultClock);
        repository.append(&message).await?;
    }

    let recent = repository.list_recent(2).await?;
    let texts: Vec<&str> = recent
        .iter()
        .map(|message| message.content().as_str())
        .collect();
    ensure!(texts == ["second", "third"], "unexpected history {texts:?}");
    Ok(())
}
