//! When steps for task assignment scope BDD scenarios.

use chargehand::directory::domain::EmployeeId;
use chargehand::project::domain::ProjectId;
use chargehand::task::domain::{TaskDifficulty, TaskPriority};
use chargehand::task::services::CreateTaskRequest;
use chrono::{Duration, Utc};
use rstest_bdd_macros::when;

use super::world::{AssignmentScopeWorld, CLOSED_PROJECT, PROJECT, run_async};

fn attempt_assignment(
    world: &mut AssignmentScopeWorld,
    actor: u64,
    assignee: u64,
    project: ProjectId,
) {
    let request = CreateTaskRequest::new(
        EmployeeId::new(actor),
        project,
        "Scenario task",
        EmployeeId::new(assignee),
        TaskPriority::Medium,
        TaskDifficulty::Medium,
        Utc::now() + Duration::days(7),
    );
    world.last_result = Some(run_async(world.service.create_task(request)));
}

#[when("employee {actor:u64} assigns a task to employee {assignee:u64}")]
fn assign_task(world: &mut AssignmentScopeWorld, actor: u64, assignee: u64) {
    attempt_assignment(world, actor, assignee, PROJECT);
}

#[when("employee {actor:u64} assigns a task to employee {assignee:u64} in the closed project")]
fn assign_task_in_closed_project(world: &mut AssignmentScopeWorld, actor: u64, assignee: u64) {
    attempt_assignment(world, actor, assignee, CLOSED_PROJECT);
}
