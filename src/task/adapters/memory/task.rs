//! In-memory store for task lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult, WriteOutcome},
};

/// Thread-safe in-memory task store.
///
/// Guarded writes hold the single write lock across the compare and the
/// write, giving the per-task atomicity the port demands.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    project_index: HashMap<ProjectId, Vec<TaskId>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }
        state
            .project_index
            .entry(task.project_id())
            .or_default()
            .push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_by_project(&self, project_id: ProjectId) -> TaskStoreResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let tasks = state
            .project_index
            .get(&project_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn update_if_status(
        &self,
        task: &Task,
        expected: TaskStatus,
    ) -> TaskStoreResult<WriteOutcome> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let current = state
            .tasks
            .get(&task.id())
            .ok_or(TaskStoreError::NotFound(task.id()))?
            .status();
        if current != expected {
            return Ok(WriteOutcome::Conflict { current });
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(WriteOutcome::Applied)
    }
}
