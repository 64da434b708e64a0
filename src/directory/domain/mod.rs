//! Domain model for the employee directory.
//!
//! Directory records are read-only to this crate. The hierarchy encoded in
//! [`Role`] drives every assignment and escalation decision in the task
//! context.

mod employee;
mod ids;
mod role;

pub use employee::Employee;
pub use ids::{DepartmentId, EmployeeId};
pub use role::{ParseRoleError, Role};
