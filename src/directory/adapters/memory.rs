//! In-memory employee directory for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{Employee, EmployeeId},
    ports::{EmployeeDirectory, EmployeeDirectoryError, EmployeeDirectoryResult},
};

/// Thread-safe in-memory employee directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeDirectory {
    state: Arc<RwLock<HashMap<EmployeeId, Employee>>>,
}

impl InMemoryEmployeeDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an employee record.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDirectoryError::Unavailable`] when the backing lock
    /// is poisoned.
    pub fn upsert(&self, employee: Employee) -> EmployeeDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            EmployeeDirectoryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        state.insert(employee.id, employee);
        Ok(())
    }

    /// Removes an employee record, if present.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDirectoryError::Unavailable`] when the backing lock
    /// is poisoned.
    pub fn remove(&self, id: EmployeeId) -> EmployeeDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            EmployeeDirectoryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        state.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn find_employee(&self, id: EmployeeId) -> EmployeeDirectoryResult<Option<Employee>> {
        let state = self.state.read().map_err(|err| {
            EmployeeDirectoryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn list_team_members(&self, lead: EmployeeId) -> EmployeeDirectoryResult<Vec<Employee>> {
        let state = self.state.read().map_err(|err| {
            EmployeeDirectoryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        let mut members: Vec<Employee> = state
            .values()
            .filter(|employee| employee.team_lead_id == Some(lead))
            .cloned()
            .collect();
        members.sort_by_key(|employee| employee.id);
        Ok(members)
    }
}
