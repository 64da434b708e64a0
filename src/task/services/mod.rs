//! Application services for task lifecycle orchestration.

mod lifecycle;
mod listing;

pub use lifecycle::{
    ChangeStatusRequest, CreateTaskRequest, ListTasksRequest, TaskLifecycleService,
    TaskServiceError, TaskServiceResult, UpdateTaskRequest,
};
pub use listing::{SortDirection, TaskFilters, TaskOrdering, TaskSortKey, VisibilityScope};
