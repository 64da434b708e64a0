//! Employee records read from the corporate directory.

use serde::{Deserialize, Serialize};

use super::{DepartmentId, EmployeeId, Role};

/// Employee record as published by the corporate directory.
///
/// The directory service owns these records; this crate only reads them.
/// Reporting lines are queried live for every decision, so a record never
/// represents more than the directory's current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Directory-issued employee identifier.
    pub id: EmployeeId,

    /// Role within the department hierarchy.
    pub role: Role,

    /// Department the employee belongs to.
    pub department_id: DepartmentId,

    /// Direct manager, when one is assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<EmployeeId>,

    /// Team lead the employee reports to, when one is assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_lead_id: Option<EmployeeId>,
}

impl Employee {
    /// Creates an employee record with no manager or team lead.
    #[must_use]
    pub const fn new(id: EmployeeId, role: Role, department_id: DepartmentId) -> Self {
        Self {
            id,
            role,
            department_id,
            manager_id: None,
            team_lead_id: None,
        }
    }

    /// Sets the direct manager.
    #[must_use]
    pub const fn with_manager(mut self, manager_id: EmployeeId) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    /// Sets the team lead.
    #[must_use]
    pub const fn with_team_lead(mut self, team_lead_id: EmployeeId) -> Self {
        self.team_lead_id = Some(team_lead_id);
        self
    }
}
