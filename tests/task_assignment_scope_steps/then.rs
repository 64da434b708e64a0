//! Then steps for task assignment scope BDD scenarios.

use chargehand::directory::domain::EmployeeId;
use chargehand::task::{authz::TaskRejection, domain::TaskStatus, services::TaskServiceError};
use rstest_bdd_macros::then;

use super::world::AssignmentScopeWorld;

fn expect_rejection(
    world: &AssignmentScopeWorld,
    expected: &TaskRejection,
) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing assignment result"))?;

    match result {
        Err(TaskServiceError::Rejected(rejection)) if rejection == expected => Ok(()),
        _ => Err(eyre::eyre!("expected {expected} rejection, got {result:?}")),
    }
}

#[then("the task is created and assigned to employee {assignee:u64}")]
fn task_created(world: &AssignmentScopeWorld, assignee: u64) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing assignment result"))?;

    let task = result
        .as_ref()
        .map_err(|err| eyre::eyre!("expected a created task, got {err}"))?;
    if task.assigned_to() != EmployeeId::new(assignee) {
        return Err(eyre::eyre!(
            "expected assignee {assignee}, got {}",
            task.assigned_to()
        ));
    }
    if task.status() != TaskStatus::NotStarted {
        return Err(eyre::eyre!(
            "expected a fresh task, got status {}",
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then("the assignment is rejected as out of team")]
fn rejected_out_of_team(world: &AssignmentScopeWorld) -> Result<(), eyre::Report> {
    expect_rejection(world, &TaskRejection::OutOfTeam)
}

#[then("the assignment is rejected as outside the managed domain")]
fn rejected_out_of_domain(world: &AssignmentScopeWorld) -> Result<(), eyre::Report> {
    expect_rejection(world, &TaskRejection::OutOfDomain)
}

#[then("the assignment is rejected for insufficient rank")]
fn rejected_for_rank(world: &AssignmentScopeWorld) -> Result<(), eyre::Report> {
    expect_rejection(world, &TaskRejection::InsufficientRank)
}

#[then("the assignment is rejected because the project is closed")]
fn rejected_for_closed_project(world: &AssignmentScopeWorld) -> Result<(), eyre::Report> {
    expect_rejection(world, &TaskRejection::ProjectClosed)
}
