//! Authorization for task mutations.
//!
//! The engine is the only producer of [`crate::task::domain::StatusChange`]
//! grants; services ask it for a verdict and apply the result.

mod engine;
mod rejection;
mod scope;

pub use engine::{AuthorizationEngine, StatusChangeContext};
pub use rejection::TaskRejection;
pub use scope::{DomainDepartment, validate_assignment_scope};
