//! Store port for task persistence and per-task guarded writes.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskId, TaskStatus};

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Outcome of a status-guarded task write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The stored status matched the guard and the write was applied.
    Applied,
    /// The stored status no longer matched the guard; nothing was written.
    Conflict {
        /// Status the store held at write time.
        current: TaskStatus,
    },
}

/// Task persistence contract.
///
/// Writes to an existing task are guarded by the status the caller read,
/// so two racing mutations cannot both commit against the same prior
/// state. Callers observing a conflict re-read and re-validate.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the task ID already
    /// exists.
    async fn insert(&self, task: &Task) -> TaskStoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Returns all tasks belonging to the given project.
    async fn list_by_project(&self, project_id: ProjectId) -> TaskStoreResult<Vec<Task>>;

    /// Writes an updated task if its stored status still equals `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update_if_status(
        &self,
        task: &Task,
        expected: TaskStatus,
    ) -> TaskStoreResult<WriteOutcome>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
