//! In-memory project registry for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRegistry, ProjectRegistryError, ProjectRegistryResult},
};

/// Thread-safe in-memory project registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRegistry {
    state: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a project record.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRegistryError::Unavailable`] when the backing lock is
    /// poisoned.
    pub fn upsert(&self, project: Project) -> ProjectRegistryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProjectRegistryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        state.insert(project.id, project);
        Ok(())
    }
}

#[async_trait]
impl ProjectRegistry for InMemoryProjectRegistry {
    async fn find_project(&self, id: ProjectId) -> ProjectRegistryResult<Option<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRegistryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }
}
