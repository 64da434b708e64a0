//! Assignment scope validation.
//!
//! Decides whether a creator may assign work to a candidate assignee,
//! based on role rank and organizational relationship.

use serde::{Deserialize, Serialize};

use crate::directory::domain::{DepartmentId, Employee, Role};

use super::TaskRejection;

/// Department whose members are eligible for task assignment.
///
/// Injected configuration rather than a hard-coded department name, so the
/// same engine serves any organizational context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainDepartment(DepartmentId);

impl DomainDepartment {
    /// Marks the given department as the task domain.
    #[must_use]
    pub const fn new(department_id: DepartmentId) -> Self {
        Self(department_id)
    }

    /// Returns the wrapped department identifier.
    #[must_use]
    pub const fn department_id(self) -> DepartmentId {
        self.0
    }

    /// Returns whether the employee belongs to this department.
    #[must_use]
    pub fn contains(self, employee: &Employee) -> bool {
        employee.department_id == self.0
    }
}

/// Validates that `creator` may assign a task to `assignee`.
///
/// Checks run in order: the assignee must belong to the domain department,
/// then the creator's role determines the reach of the assignment. Team
/// leads assign within their own team, unit heads anywhere in the domain,
/// department managers within their own department. Other roles may not
/// assign tasks at all.
///
/// # Errors
///
/// Returns the first failing check as [`TaskRejection::OutOfDomain`],
/// [`TaskRejection::OutOfTeam`], [`TaskRejection::OutOfDepartment`], or
/// [`TaskRejection::InsufficientRank`].
pub fn validate_assignment_scope(
    creator: &Employee,
    assignee: &Employee,
    domain: DomainDepartment,
) -> Result<(), TaskRejection> {
    if !domain.contains(assignee) {
        return Err(TaskRejection::OutOfDomain);
    }
    match creator.role {
        Role::TeamLead => {
            if assignee.team_lead_id != Some(creator.id) {
                return Err(TaskRejection::OutOfTeam);
            }
            Ok(())
        }
        Role::UnitHead => Ok(()),
        Role::DepManager => {
            if assignee.department_id != creator.department_id {
                return Err(TaskRejection::OutOfDepartment);
            }
            Ok(())
        }
        Role::Senior | Role::Junior => Err(TaskRejection::InsufficientRank),
    }
}
