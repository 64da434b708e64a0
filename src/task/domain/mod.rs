//! Domain model for project task lifecycle management.
//!
//! The task domain models task creation, creator edits, and status
//! progression through a validated state machine, while keeping all
//! infrastructure concerns outside of the domain boundary. Status changes
//! are applied from grants issued by the authorization engine; the aggregate
//! itself never re-decides permissions.

mod attributes;
mod error;
mod ids;
mod status;
mod task;

pub use attributes::{TaskDifficulty, TaskPriority};
pub use error::{
    ParseTaskDifficultyError, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError,
};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{NewTaskData, PersistedTaskData, StatusChange, StatusComment, Task, TaskPatch};
