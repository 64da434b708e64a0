//! Registry port for project lookup.

use crate::project::domain::{Project, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project registry operations.
pub type ProjectRegistryResult<T> = Result<T, ProjectRegistryError>;

/// Read-only contract over the project registry.
#[async_trait]
pub trait ProjectRegistry: Send + Sync {
    /// Finds a project by identifier.
    ///
    /// Returns `None` when the registry holds no matching record.
    async fn find_project(&self, id: ProjectId) -> ProjectRegistryResult<Option<Project>>;
}

/// Errors returned by project registry implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRegistryError {
    /// The registry backend could not be reached or answered abnormally.
    #[error("project registry unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRegistryError {
    /// Wraps a backend failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
