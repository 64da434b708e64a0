//! Project records read from the registry.

use serde::{Deserialize, Serialize};

use super::{ProjectId, ProjectStatus};

/// Project record as published by the project registry.
///
/// The registry owns project lifecycle; this crate only consults it when
/// deciding whether a project still accepts tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Registry-issued project identifier.
    pub id: ProjectId,

    /// Current lifecycle status.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a project record.
    #[must_use]
    pub const fn new(id: ProjectId, status: ProjectStatus) -> Self {
        Self { id, status }
    }
}
