//! Given steps for task proof review BDD scenarios.

use super::world::{TaskReviewWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use mockable::DefaultClock;
use staffnet::staff::{
    domain::{AccessLevel, EmailAddress, FullName, StaffMember},
    ports::StaffRepository,
};
use staffnet::task::{
    domain::ReviewDecision,
    services::{CreateTaskRequest, ReviewTaskRequest, SubmitProofRequest},
};

#[given(r#""{name}" has {level} access"#)]
fn member_with_access(
    world: &mut TaskReviewWorld,
    name: String,
    level: String,
) -> Result<(), eyre::Report> {
    let access_level = AccessLevel::try_from(level.as_str())
        .map_err(|err| eyre::eyre!("invalid access level in scenario: {err}"))?;
    let member = StaffMember::new(
        FullName::new(name.as_str())?,
        EmailAddress::new(format!("{}@staffnet.test", name.to_lowercase()))?,
        access_level,
        &DefaultClock,
    );
    run_async(world.staff.store(&member)).wrap_err("enrol scenario staff member")?;
    let actor = member
        .as_actor()
        .ok_or_else(|| eyre::eyre!("{name} was enrolled banned"))?;
    world.members.insert(name, actor);
    Ok(())
}

#[given(r#""{name}" is banned"#)]
fn member_banned(world: &mut TaskReviewWorld, name: String) -> Result<(), eyre::Report> {
    let staff_id = world.member(&name)?.id();
    let mut member = run_async(world.staff.find_by_id(staff_id))?
        .ok_or_else(|| eyre::eyre!("{name} is missing from the staff directory"))?;
    member.ban(&DefaultClock);
    run_async(world.staff.update(&member)).wrap_err("ban scenario staff member")?;
    Ok(())
}

#[given(r#""{manager}" has assigned a task to "{assignee}""#)]
fn task_assigned(
    world: &mut TaskReviewWorld,
    manager: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let assignee_id = world.act_as(&assignee)?.id();
    world.act_as(&manager)?;
    let task = run_async(
        world
            .service
            .create(CreateTaskRequest::new("Restock the first aid kit", assignee_id)),
    )
    .wrap_err("create task for review scenario")?;
    world.task_id = Some(task.id());
    Ok(())
}

#[given(r#""{name}" has submitted proof "{link}""#)]
fn proof_submitted(
    world: &mut TaskReviewWorld,
    name: String,
    link: String,
) -> Result<(), eyre::Report> {
    world.act_as(&name)?;
    let task_id = world.task_id()?;
    run_async(
        world
            .service
            .submit_proof(SubmitProofRequest::new(task_id, link)),
    )
    .wrap_err("submit proof in scenario setup")?;
    Ok(())
}

#[given(r#""{name}" has reviewed the proof as "{decision}""#)]
fn proof_reviewed(
    world: &mut TaskReviewWorld,
    name: String,
    decision: String,
) -> Result<(), eyre::Report> {
    let parsed = ReviewDecision::try_from(decision.as_str())
        .map_err(|err| eyre::eyre!("invalid review decision in scenario: {err}"))?;
    world.act_as(&name)?;
    let task_id = world.task_id()?;
    run_async(
        world
            .service
            .review(ReviewTaskRequest::new(task_id, parsed)),
    )
    .wrap_err("review proof in scenario setup")?;
    Ok(())
}
