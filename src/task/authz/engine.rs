//! Task authorization engine.
//!
//! Single decision point for task mutations. Composes the role hierarchy,
//! the assignment scope validator, and the status state machine into one
//! verdict per requested operation. Callers apply granted changes without
//! re-deciding permissions.

use chrono::{DateTime, Utc};

use crate::directory::domain::{Employee, Role};
use crate::project::domain::Project;
use crate::task::domain::{StatusChange, StatusComment, Task, TaskPatch, TaskStatus};

use super::TaskRejection;
use super::scope::{DomainDepartment, validate_assignment_scope};

/// Everything the engine needs to judge one status change request.
#[derive(Debug, Clone, Copy)]
pub struct StatusChangeContext<'a> {
    /// Employee requesting the change.
    pub actor: &'a Employee,
    /// Task the change targets.
    pub task: &'a Task,
    /// Role of the task's creator, when the directory still knows them.
    pub creator_role: Option<Role>,
    /// Status the request asks for.
    pub requested: TaskStatus,
    /// Free-text comment supplied with the request, if any.
    pub comment: Option<&'a str>,
}

/// Decides whether task operations are permitted.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationEngine {
    domain_department: DomainDepartment,
}

impl AuthorizationEngine {
    /// Creates an engine gating task work to the given domain department.
    #[must_use]
    pub const fn new(domain_department: DomainDepartment) -> Self {
        Self { domain_department }
    }

    /// Returns the department this engine gates task work to.
    #[must_use]
    pub const fn domain_department(&self) -> DomainDepartment {
        self.domain_department
    }

    /// Requires the employee to belong to the domain department.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRejection::OutOfDomain`] for employees of any other
    /// department.
    pub fn require_in_domain(&self, employee: &Employee) -> Result<(), TaskRejection> {
        if !self.domain_department.contains(employee) {
            return Err(TaskRejection::OutOfDomain);
        }
        Ok(())
    }

    /// Authorizes creating a task.
    ///
    /// The creator must act within the domain department and be permitted
    /// to assign to the assignee, the project must still accept tasks, and
    /// the due date must lie strictly in the future.
    ///
    /// # Errors
    ///
    /// Returns the scope validator's rejection, or
    /// [`TaskRejection::ProjectClosed`] and
    /// [`TaskRejection::DueDateNotFuture`] for the remaining checks.
    pub fn authorize_creation(
        &self,
        creator: &Employee,
        assignee: &Employee,
        project: &Project,
        due_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), TaskRejection> {
        self.require_in_domain(creator)?;
        validate_assignment_scope(creator, assignee, self.domain_department)?;
        if project.status.is_closed() {
            return Err(TaskRejection::ProjectClosed);
        }
        if due_at <= now {
            return Err(TaskRejection::DueDateNotFuture);
        }
        Ok(())
    }

    /// Authorizes an edit to a task's descriptive fields.
    ///
    /// Only the task's creator may edit, regardless of rank. A replacement
    /// due date must lie strictly in the future and is refused outright
    /// once the task is closed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRejection::ForbiddenEdit`] for any other actor,
    /// [`TaskRejection::DueDateLocked`] for due date changes on a closed
    /// task, or [`TaskRejection::DueDateNotFuture`] for a stale due date.
    pub fn authorize_field_update(
        &self,
        actor: &Employee,
        task: &Task,
        patch: &TaskPatch,
        now: DateTime<Utc>,
    ) -> Result<(), TaskRejection> {
        self.require_in_domain(actor)?;
        if actor.id != task.assigned_by() {
            return Err(TaskRejection::ForbiddenEdit);
        }
        if let Some(due_at) = patch.due_at() {
            if task.status().is_terminal() {
                return Err(TaskRejection::DueDateLocked);
            }
            if due_at <= now {
                return Err(TaskRejection::DueDateNotFuture);
            }
        }
        Ok(())
    }

    /// Judges a status change request and issues the grant to apply.
    ///
    /// Transition legality comes first. Advancing work (into in-progress or
    /// review) is open to supervisors and to the task's assignee. Closing
    /// work (completing or cancelling) is restricted to supervisors cleared
    /// by the escalation rule, and cancelling also requires a comment,
    /// which the grant carries in audit form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRejection::InvalidTransition`],
    /// [`TaskRejection::ForbiddenStatusChange`], or
    /// [`TaskRejection::CommentRequired`] following that precedence.
    pub fn authorize_status_change(
        &self,
        ctx: &StatusChangeContext<'_>,
    ) -> Result<StatusChange, TaskRejection> {
        self.require_in_domain(ctx.actor)?;

        let current = ctx.task.status();
        if !current.can_transition_to(ctx.requested) {
            return Err(TaskRejection::InvalidTransition {
                from: current,
                to: ctx.requested,
            });
        }

        if ctx.requested.is_terminal() {
            if !ctx.actor.role.is_supervisor() || !escalation_permits(ctx) {
                return Err(TaskRejection::ForbiddenStatusChange);
            }
        } else if !ctx.actor.role.is_supervisor() && ctx.actor.id != ctx.task.assigned_to() {
            return Err(TaskRejection::ForbiddenStatusChange);
        }

        let comment = status_comment(ctx)?;
        Ok(StatusChange::new(ctx.requested, comment))
    }
}

/// Resolves the escalation rule for completing or cancelling a task.
///
/// Authority to close a task flows upward from the level that opened it,
/// never downward. An unknown creator fails closed.
fn escalation_permits(ctx: &StatusChangeContext<'_>) -> bool {
    ctx.creator_role.is_some_and(|creator_role| match creator_role {
        Role::TeamLead => ctx.actor.role.is_supervisor(),
        Role::UnitHead => ctx.actor.role == Role::DepManager,
        Role::DepManager => ctx.actor.id == ctx.task.assigned_by(),
        Role::Senior | Role::Junior => false,
    })
}

/// Derives the comment update carried by a granted status change.
///
/// Cancellations require a comment with visible content and carry it in
/// audit form. Other transitions carry a plain note when one was supplied.
fn status_comment(ctx: &StatusChangeContext<'_>) -> Result<Option<StatusComment>, TaskRejection> {
    if ctx.requested == TaskStatus::Cancelled {
        let text = ctx
            .comment
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or(TaskRejection::CommentRequired)?;
        return Ok(Some(StatusComment::CancellationAudit {
            actor: ctx.actor.id,
            text: text.to_owned(),
        }));
    }
    Ok(ctx
        .comment
        .filter(|text| !text.is_empty())
        .map(|text| StatusComment::Note(text.to_owned())))
}
