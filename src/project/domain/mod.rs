//! Domain model for the project registry.

mod ids;
mod project;
mod status;

pub use ids::ProjectId;
pub use project::Project;
pub use status::{ParseProjectStatusError, ProjectStatus};
