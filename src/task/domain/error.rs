//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing task difficulties from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task difficulty: {0}")]
pub struct ParseTaskDifficultyError(pub String);
