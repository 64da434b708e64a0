//! Task aggregate root and the mutations applied to it.

use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::directory::domain::EmployeeId;
use crate::project::domain::ProjectId;

use super::{TaskDifficulty, TaskDomainError, TaskId, TaskPriority, TaskStatus};

/// Task aggregate root.
///
/// Tasks are created in [`TaskStatus::NotStarted`] and only move through the
/// transitions the status state machine permits. Status mutations are applied
/// from [`StatusChange`] grants issued by the authorization engine; the
/// aggregate records the outcome but never re-decides permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    assigned_by: EmployeeId,
    assigned_to: EmployeeId,
    priority: TaskPriority,
    difficulty: TaskDifficulty,
    status: TaskStatus,
    started_at: Option<DateTime<Utc>>,
    due_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    comments: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Project the task belongs to.
    pub project_id: ProjectId,
    /// Short task title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Employee who created the task.
    pub assigned_by: EmployeeId,
    /// Employee the task is assigned to.
    pub assigned_to: EmployeeId,
    /// Business priority.
    pub priority: TaskPriority,
    /// Difficulty estimate.
    pub difficulty: TaskDifficulty,
    /// Deadline for the work.
    pub due_at: DateTime<Utc>,
    /// Initial free-text comment, if any.
    pub comments: Option<String>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted project identifier.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted creator identifier.
    pub assigned_by: EmployeeId,
    /// Persisted assignee identifier.
    pub assigned_to: EmployeeId,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted difficulty.
    pub difficulty: TaskDifficulty,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted start timestamp, if work began.
    pub started_at: Option<DateTime<Utc>>,
    /// Persisted deadline.
    pub due_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted comment text, if any.
    pub comments: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Partial update to a task's descriptive fields.
///
/// Absent fields are left unchanged when the patch is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    priority: Option<TaskPriority>,
    difficulty: Option<TaskDifficulty>,
    due_at: Option<DateTime<Utc>>,
    comments: Option<String>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the difficulty.
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: TaskDifficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Replaces the deadline.
    #[must_use]
    pub const fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Replaces the comment text.
    #[must_use]
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Returns the replacement deadline, if the patch carries one.
    #[must_use]
    pub const fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }
}

/// Comment update carried by a granted status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusComment {
    /// Free-text note stored as supplied.
    Note(String),
    /// Cancellation note stored with a date and actor audit prefix.
    CancellationAudit {
        /// Employee who cancelled the task.
        actor: EmployeeId,
        /// Explanation supplied with the cancellation.
        text: String,
    },
}

/// Granted status change issued by the authorization engine.
///
/// Holding a value of this type means the change was authorized; the
/// aggregate applies it without re-deciding permissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    status: TaskStatus,
    comment: Option<StatusComment>,
}

impl StatusChange {
    /// Creates a grant; only the authorization engine constructs these.
    pub(crate) const fn new(status: TaskStatus, comment: Option<StatusComment>) -> Self {
        Self { status, comment }
    }

    /// Returns the target status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the comment update carried by the grant, if any.
    #[must_use]
    pub const fn comment(&self) -> Option<&StatusComment> {
        self.comment.as_ref()
    }
}

impl Task {
    /// Creates a task in the initial [`TaskStatus::NotStarted`] status.
    ///
    /// The title is stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let title = validated_title(&data.title)?;
        let timestamp = clock.utc();

        Ok(Self {
            id: TaskId::new(),
            project_id: data.project_id,
            title,
            description: data.description,
            assigned_by: data.assigned_by,
            assigned_to: data.assigned_to,
            priority: data.priority,
            difficulty: data.difficulty,
            status: TaskStatus::NotStarted,
            started_at: None,
            due_at: data.due_at,
            completed_at: None,
            comments: data.comments,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            assigned_by: data.assigned_by,
            assigned_to: data.assigned_to,
            priority: data.priority,
            difficulty: data.difficulty,
            status: data.status,
            started_at: data.started_at,
            due_at: data.due_at,
            completed_at: data.completed_at,
            comments: data.comments,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the project the task belongs to.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the employee who created the task.
    #[must_use]
    pub const fn assigned_by(&self) -> EmployeeId {
        self.assigned_by
    }

    /// Returns the employee the task is assigned to.
    #[must_use]
    pub const fn assigned_to(&self) -> EmployeeId {
        self.assigned_to
    }

    /// Returns the business priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the difficulty estimate.
    #[must_use]
    pub const fn difficulty(&self) -> TaskDifficulty {
        self.difficulty
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns when work began, if it has.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    /// Returns when the task completed, if it has.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the stored comment text, if any.
    #[must_use]
    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a creator edit to descriptive fields.
    ///
    /// Authorization happens in the engine; this only applies the patch.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when a replacement title is
    /// empty after trimming. The task is left unchanged on error.
    pub fn apply_update(
        &mut self,
        patch: TaskPatch,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let replacement_title = patch.title.as_deref().map(validated_title).transpose()?;

        if let Some(title) = replacement_title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(due_at) = patch.due_at {
            self.due_at = due_at;
        }
        if let Some(comments) = patch.comments {
            self.comments = Some(comments);
        }
        self.touch(clock);
        Ok(())
    }

    /// Applies a granted status change.
    ///
    /// Entering [`TaskStatus::InProgress`] from [`TaskStatus::NotStarted`]
    /// stamps the start timestamp; entering [`TaskStatus::Completed`] stamps
    /// the completion timestamp. Cancellation comments are stored as
    /// `<date>, Changed by ID: <actor>, <text>` for audit consumers.
    pub fn apply_status_change(&mut self, change: StatusChange, clock: &impl Clock) {
        let now = clock.utc();

        if self.status == TaskStatus::NotStarted && change.status == TaskStatus::InProgress {
            self.started_at = Some(now);
        }
        if change.status == TaskStatus::Completed {
            self.completed_at = Some(now);
        }
        match change.comment {
            Some(StatusComment::Note(text)) => self.comments = Some(text),
            Some(StatusComment::CancellationAudit { actor, text }) => {
                self.comments = Some(format_audit_comment(now.date_naive(), actor, &text));
            }
            None => {}
        }
        self.status = change.status;
        self.updated_at = now;
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Trims a title and rejects empty results.
fn validated_title(raw: &str) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}

/// Formats the audit line stored when a task is cancelled.
fn format_audit_comment(date: NaiveDate, actor: EmployeeId, text: &str) -> String {
    format!("{date}, Changed by ID: {actor}, {text}")
}
