//! Directory port for employee lookup and team membership queries.

use crate::directory::domain::{Employee, EmployeeId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for employee directory operations.
pub type EmployeeDirectoryResult<T> = Result<T, EmployeeDirectoryError>;

/// Read-only contract over the corporate employee directory.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Finds an employee by identifier.
    ///
    /// Returns `None` when the directory holds no matching record.
    async fn find_employee(&self, id: EmployeeId) -> EmployeeDirectoryResult<Option<Employee>>;

    /// Returns the employees whose team lead is `lead`.
    ///
    /// Membership reflects the directory's current state; callers must not
    /// cache the result across decisions.
    async fn list_team_members(&self, lead: EmployeeId) -> EmployeeDirectoryResult<Vec<Employee>>;
}

/// Errors returned by employee directory implementations.
#[derive(Debug, Clone, Error)]
pub enum EmployeeDirectoryError {
    /// The directory backend could not be reached or answered abnormally.
    #[error("employee directory unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl EmployeeDirectoryError {
    /// Wraps a backend failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
