//! When steps for task proof review BDD scenarios.

use super::world::{TaskReviewWorld, run_async};
use rstest_bdd_macros::when;
use staffnet::task::{
    domain::ReviewDecision,
    services::{CreateTaskRequest, ReviewTaskRequest, SubmitProofRequest},
};

#[when(r#""{name}" submits proof "{link}""#)]
fn submit_proof(
    world: &mut TaskReviewWorld,
    name: String,
    link: String,
) -> Result<(), eyre::Report> {
    world.act_as(&name)?;
    let task_id = world.task_id()?;
    let result = run_async(
        world
            .service
            .submit_proof(SubmitProofRequest::new(task_id, link)),
    );
    world.last_result = Some(result);
    Ok(())
}

#[when(r#""{name}" reviews the proof as "{decision}""#)]
fn review_proof(
    world: &mut TaskReviewWorld,
    name: String,
    decision: String,
) -> Result<(), eyre::Report> {
    let parsed = ReviewDecision::try_from(decision.as_str())
        .map_err(|err| eyre::eyre!("invalid review decision in scenario: {err}"))?;
    world.act_as(&name)?;
    let task_id = world.task_id()?;
    let result = run_async(
        world
            .service
            .review(ReviewTaskRequest::new(task_id, parsed)),
    );
    world.last_result = Some(result);
    Ok(())
}

#[when(r#""{name}" starts work on the task"#)]
fn start_work(world: &mut TaskReviewWorld, name: String) -> Result<(), eyre::Report> {
    world.act_as(&name)?;
    let task_id = world.task_id()?;
    let result = run_async(world.service.start_work(task_id));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#""{manager}" assigns a task to "{assignee}""#)]
fn assign_task(
    world: &mut TaskReviewWorld,
    manager: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let assignee_id = world.member(&assignee)?.id();
    world.act_as(&manager)?;
    let result = run_async(
        world
            .service
            .create(CreateTaskRequest::new("Cover the front desk", assignee_id)),
    );
    if let Ok(task) = &result {
        world.task_id = Some(task.id());
    }
    world.last_result = Some(result);
    Ok(())
}
