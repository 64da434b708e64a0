//! When steps for task status authorization BDD scenarios.

use chargehand::directory::domain::EmployeeId;
use chargehand::task::domain::TaskStatus;
use chargehand::task::services::ChangeStatusRequest;
use rstest_bdd_macros::when;

use super::world::{PROJECT, StatusAuthorizationWorld, run_async};

fn attempt_move(
    world: &mut StatusAuthorizationWorld,
    actor: u64,
    status: &str,
    comment: Option<String>,
) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status)
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;

    let mut request = ChangeStatusRequest::new(EmployeeId::new(actor), PROJECT, task.id(), target);
    if let Some(text) = comment {
        request = request.with_comment(text);
    }

    let result = run_async(world.service.change_status(request));
    if let Ok(ref updated) = result {
        world.task = Some(updated.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when("employee {actor:u64} moves the task to {status:string}")]
fn move_task(
    world: &mut StatusAuthorizationWorld,
    actor: u64,
    status: String,
) -> Result<(), eyre::Report> {
    attempt_move(world, actor, &status, None)
}

#[when(r#"employee {actor:u64} moves the task to "{status}" with comment "{comment}""#)]
fn move_task_with_comment(
    world: &mut StatusAuthorizationWorld,
    actor: u64,
    status: String,
    comment: String,
) -> Result<(), eyre::Report> {
    attempt_move(world, actor, &status, Some(comment))
}
