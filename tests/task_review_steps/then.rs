//! Then steps for task proof review BDD scenarios.

use super::world::TaskReviewWorld;
use rstest_bdd_macros::then;
use staffnet::task::domain::{ProofStatus, TaskStatus};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskReviewWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.stored_task()?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the proof status is "{status}""#)]
fn proof_status_is(world: &TaskReviewWorld, status: String) -> Result<(), eyre::Report> {
    let expected = ProofStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected proof status in scenario: {err}"))?;
    let task = world.stored_task()?;

    if task.proof_status() != expected {
        return Err(eyre::eyre!(
            "expected proof status {}, found {}",
            expected.as_str(),
            task.proof_status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the proof link is "{link}""#)]
fn proof_link_is(world: &TaskReviewWorld, link: String) -> Result<(), eyre::Report> {
    let task = world.stored_task()?;
    let stored = task.proof_url().map(|url| url.as_str());

    if stored != Some(link.as_str()) {
        return Err(eyre::eyre!("expected proof link {link}, found {stored:?}"));
    }
    Ok(())
}

#[then("the operation is rejected as unauthorized")]
fn rejected_as_unauthorized(world: &TaskReviewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    if !result.as_ref().is_err_and(|err| err.is_unauthorized()) {
        return Err(eyre::eyre!("expected Unauthorized error, got {result:?}"));
    }
    Ok(())
}

#[then("the operation is rejected as an invalid state")]
fn rejected_as_invalid_state(world: &TaskReviewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    if !result.as_ref().is_err_and(|err| err.is_invalid_state()) {
        return Err(eyre::eyre!("expected InvalidState error, got {result:?}"));
    }
    Ok(())
}

#[then("the operation is rejected because the assignee cannot take work")]
fn rejected_as_unassignable(world: &TaskReviewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    if !result.as_ref().is_err_and(|err| err.is_unassignable()) {
        return Err(eyre::eyre!("expected an unassignable assignee error, got {result:?}"));
    }
    if world.task_id.is_some() {
        return Err(eyre::eyre!("no task should have been created"));
    }
    Ok(())
}
