//! Role-scoped visibility, filtering, and ordering for task listings.
//!
//! Listing is a read concern: a visibility predicate over the persisted
//! set, kept deliberately separate from the mutation gating in
//! [`crate::task::authz`].

use crate::directory::domain::EmployeeId;
use crate::task::domain::{Task, TaskPriority, TaskStatus};

/// Visibility scope resolved for one actor.
///
/// Department managers and unit heads see every task in the domain. Team
/// leads see tasks assigned to their current direct reports. Everyone else
/// sees only their own assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityScope {
    /// Every task in the domain is visible.
    Domain,
    /// Tasks assigned to these employees are visible.
    Team(Vec<EmployeeId>),
    /// Only the actor's own assignments are visible.
    Own(EmployeeId),
}

impl VisibilityScope {
    /// Returns whether a task assigned to `assignee` falls inside the scope.
    #[must_use]
    pub fn includes(&self, assignee: EmployeeId) -> bool {
        match self {
            Self::Domain => true,
            Self::Team(members) => members.contains(&assignee),
            Self::Own(own) => *own == assignee,
        }
    }
}

/// Attribute filters applied to a task listing.
///
/// Filters only narrow the visible set; they never widen it past the
/// actor's visibility scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilters {
    status: Option<TaskStatus>,
    assigned_to: Option<EmployeeId>,
    priority: Option<TaskPriority>,
}

impl TaskFilters {
    /// Creates a filter set that matches every task.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            assigned_to: None,
            priority: None,
        }
    }

    /// Keeps only tasks in the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Keeps only tasks assigned to the given employee.
    #[must_use]
    pub const fn with_assigned_to(mut self, assigned_to: EmployeeId) -> Self {
        self.assigned_to = Some(assigned_to);
        self
    }

    /// Keeps only tasks with the given priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns whether the task passes every set filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|status| task.status() == status)
            && self
                .assigned_to
                .is_none_or(|assignee| task.assigned_to() == assignee)
            && self.priority.is_none_or(|priority| task.priority() == priority)
    }
}

/// Sort key for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSortKey {
    /// Order by deadline.
    DueAt,
    /// Order by business priority.
    Priority,
    /// Order by creation time.
    CreatedAt,
}

/// Sort direction for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

/// Ordering applied to a task listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskOrdering {
    key: TaskSortKey,
    direction: SortDirection,
}

impl TaskOrdering {
    /// Creates the ordering for a key with its natural direction.
    ///
    /// Deadlines read soonest first, priorities lowest first, creation
    /// time newest first.
    #[must_use]
    pub const fn new(key: TaskSortKey) -> Self {
        let direction = match key {
            TaskSortKey::DueAt | TaskSortKey::Priority => SortDirection::Ascending,
            TaskSortKey::CreatedAt => SortDirection::Descending,
        };
        Self { key, direction }
    }

    /// Overrides the sort direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sorts tasks in place, keeping equal keys in their incoming order.
    pub fn sort(self, tasks: &mut [Task]) {
        tasks.sort_by(|left, right| {
            let ordering = match self.key {
                TaskSortKey::DueAt => left.due_at().cmp(&right.due_at()),
                TaskSortKey::Priority => {
                    left.priority().sort_weight().cmp(&right.priority().sort_weight())
                }
                TaskSortKey::CreatedAt => left.created_at().cmp(&right.created_at()),
            };
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

impl Default for TaskOrdering {
    fn default() -> Self {
        Self::new(TaskSortKey::CreatedAt)
    }
}
