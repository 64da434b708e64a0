//! Rejection codes for task operations.

use thiserror::Error;

use crate::directory::domain::EmployeeId;
use crate::project::domain::ProjectId;
use crate::task::domain::{TaskId, TaskStatus};

/// Business rejection of a requested task operation.
///
/// Rejections are expected outcomes, distinct from infrastructure faults.
/// The authorization engine and scope validator return them as values and
/// services surface them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskRejection {
    /// Referenced employee is unknown to the directory.
    #[error("employee {0} not found")]
    EmployeeNotFound(EmployeeId),
    /// Referenced project is unknown to the registry.
    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),
    /// Referenced task does not exist in the given project.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),
    /// Employee is outside the domain department for task work.
    #[error("employee is outside the task domain department")]
    OutOfDomain,
    /// Assignee is not one of the creating team lead's members.
    #[error("assignee is not in the creator's team")]
    OutOfTeam,
    /// Assignee is outside the creating department manager's department.
    #[error("assignee is outside the creator's department")]
    OutOfDepartment,
    /// Creator's role may not assign tasks.
    #[error("role lacks the rank to assign tasks")]
    InsufficientRank,
    /// Project no longer accepts new tasks.
    #[error("project is closed to new tasks")]
    ProjectClosed,
    /// Supplied due date is not strictly in the future.
    #[error("due date must be in the future")]
    DueDateNotFuture,
    /// Requested status change is not in the legal transition table.
    #[error("illegal status transition from {from} to {to}")]
    InvalidTransition {
        /// Status the task is currently in.
        from: TaskStatus,
        /// Status the request asked for.
        to: TaskStatus,
    },
    /// Actor lacks the rank or ownership for the requested transition.
    #[error("actor may not perform this status change")]
    ForbiddenStatusChange,
    /// Cancellation was requested without an explanatory comment.
    #[error("cancelling a task requires a comment")]
    CommentRequired,
    /// Actor is not the task's creator and may not edit its fields.
    #[error("only the task's creator may edit its fields")]
    ForbiddenEdit,
    /// Due date cannot change once the task is in a terminal status.
    #[error("due date is locked once the task is closed")]
    DueDateLocked,
}
