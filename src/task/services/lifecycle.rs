//! Service layer orchestrating the task lifecycle use cases.

use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::directory::domain::{Employee, EmployeeId, Role};
use crate::directory::ports::{EmployeeDirectory, EmployeeDirectoryError};
use crate::project::domain::{Project, ProjectId};
use crate::project::ports::{ProjectRegistry, ProjectRegistryError};
use crate::task::{
    authz::{AuthorizationEngine, DomainDepartment, StatusChangeContext, TaskRejection},
    domain::{
        NewTaskData, Task, TaskDifficulty, TaskDomainError, TaskId, TaskPatch, TaskPriority,
        TaskStatus,
    },
    ports::{TaskStore, TaskStoreError, WriteOutcome},
};

use super::listing::{TaskFilters, TaskOrdering, VisibilityScope};

/// Write attempts before an operation gives up under contention.
const WRITE_ATTEMPTS: usize = 3;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    actor: EmployeeId,
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    assigned_to: EmployeeId,
    priority: TaskPriority,
    difficulty: TaskDifficulty,
    due_at: DateTime<Utc>,
    comment: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        actor: EmployeeId,
        project_id: ProjectId,
        title: impl Into<String>,
        assigned_to: EmployeeId,
        priority: TaskPriority,
        difficulty: TaskDifficulty,
        due_at: DateTime<Utc>,
    ) -> Self {
        Self {
            actor,
            project_id,
            title: title.into(),
            description: None,
            assigned_to,
            priority,
            difficulty,
            due_at,
            comment: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets an initial free-text comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Request payload for editing a task's descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    actor: EmployeeId,
    project_id: ProjectId,
    task_id: TaskId,
    patch: TaskPatch,
}

impl UpdateTaskRequest {
    /// Creates a request applying `patch` to the given task.
    #[must_use]
    pub const fn new(
        actor: EmployeeId,
        project_id: ProjectId,
        task_id: TaskId,
        patch: TaskPatch,
    ) -> Self {
        Self {
            actor,
            project_id,
            task_id,
            patch,
        }
    }
}

/// Request payload for changing a task's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStatusRequest {
    actor: EmployeeId,
    project_id: ProjectId,
    task_id: TaskId,
    status: TaskStatus,
    comment: Option<String>,
}

impl ChangeStatusRequest {
    /// Creates a request moving the given task to `status`.
    #[must_use]
    pub const fn new(
        actor: EmployeeId,
        project_id: ProjectId,
        task_id: TaskId,
        status: TaskStatus,
    ) -> Self {
        Self {
            actor,
            project_id,
            task_id,
            status,
            comment: None,
        }
    }

    /// Attaches a free-text comment. Cancellations require one.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Request payload for listing a project's tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTasksRequest {
    actor: EmployeeId,
    project_id: ProjectId,
    filters: TaskFilters,
    ordering: TaskOrdering,
}

impl ListTasksRequest {
    /// Creates an unfiltered request with the default ordering.
    #[must_use]
    pub fn new(actor: EmployeeId, project_id: ProjectId) -> Self {
        Self {
            actor,
            project_id,
            filters: TaskFilters::new(),
            ordering: TaskOrdering::default(),
        }
    }

    /// Sets the attribute filters.
    #[must_use]
    pub const fn with_filters(mut self, filters: TaskFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Sets the listing order.
    #[must_use]
    pub const fn with_ordering(mut self, ordering: TaskOrdering) -> Self {
        self.ordering = ordering;
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// A business rule rejected the operation.
    #[error(transparent)]
    Rejected(#[from] TaskRejection),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Employee directory lookup failed.
    #[error(transparent)]
    Directory(#[from] EmployeeDirectoryError),
    /// Project registry lookup failed.
    #[error(transparent)]
    Registry(#[from] ProjectRegistryError),
    /// Task store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// Concurrent writers kept invalidating the read state.
    #[error("task {0} is under concurrent modification")]
    Contention(TaskId),
}

/// Result type for task lifecycle service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task lifecycle orchestration service.
///
/// Resolves actors and targets through the directory and registry ports,
/// asks the authorization engine for a verdict, and applies granted
/// mutations through the task store. Mutations re-read and re-validate
/// whenever a guarded write reports a conflict.
#[derive(Clone)]
pub struct TaskLifecycleService<D, P, S, C>
where
    D: EmployeeDirectory,
    P: ProjectRegistry,
    S: TaskStore,
    C: Clock + Send + Sync,
{
    directory: Arc<D>,
    projects: Arc<P>,
    store: Arc<S>,
    clock: Arc<C>,
    engine: AuthorizationEngine,
}

impl<D, P, S, C> TaskLifecycleService<D, P, S, C>
where
    D: EmployeeDirectory,
    P: ProjectRegistry,
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(
        directory: Arc<D>,
        projects: Arc<P>,
        store: Arc<S>,
        clock: Arc<C>,
        domain_department: DomainDepartment,
    ) -> Self {
        Self {
            directory,
            projects,
            store,
            clock,
            engine: AuthorizationEngine::new(domain_department),
        }
    }

    /// Creates a task and stores it in the initial status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Rejected`] when the authorization engine
    /// refuses the creation, [`TaskServiceError::Domain`] when the title
    /// fails validation, and port errors unchanged.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let creator = self.require_employee(request.actor).await?;
        let assignee = self.require_employee(request.assigned_to).await?;
        let project = self.require_project(request.project_id).await?;

        let now = self.clock.utc();
        self.engine
            .authorize_creation(&creator, &assignee, &project, request.due_at, now)
            .inspect_err(|rejection| {
                debug!(actor = %request.actor, %rejection, "task creation rejected");
            })?;

        let task = Task::new(
            NewTaskData {
                project_id: request.project_id,
                title: request.title,
                description: request.description,
                assigned_by: creator.id,
                assigned_to: assignee.id,
                priority: request.priority,
                difficulty: request.difficulty,
                due_at: request.due_at,
                comments: request.comment,
            },
            &*self.clock,
        )?;
        self.store.insert(&task).await?;
        info!(task_id = %task.id(), project_id = %task.project_id(), "task created");
        Ok(task)
    }

    /// Applies a creator edit to a task's descriptive fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Rejected`] when the authorization engine
    /// refuses the edit, [`TaskServiceError::Contention`] when concurrent
    /// writers exhaust the retry budget, and port errors unchanged.
    pub async fn update_task(&self, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let actor = self.require_employee(request.actor).await?;

        for _ in 0..WRITE_ATTEMPTS {
            let mut task = self
                .require_task(request.project_id, request.task_id)
                .await?;
            let expected = task.status();

            let now = self.clock.utc();
            self.engine
                .authorize_field_update(&actor, &task, &request.patch, now)
                .inspect_err(|rejection| {
                    debug!(
                        actor = %request.actor,
                        task_id = %request.task_id,
                        %rejection,
                        "task edit rejected",
                    );
                })?;

            task.apply_update(request.patch.clone(), &*self.clock)?;
            match self.store.update_if_status(&task, expected).await? {
                WriteOutcome::Applied => {
                    info!(task_id = %task.id(), "task fields updated");
                    return Ok(task);
                }
                WriteOutcome::Conflict { .. } => {}
            }
        }
        Err(TaskServiceError::Contention(request.task_id))
    }

    /// Moves a task to a new status under the authorization rules.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Rejected`] when the transition is
    /// illegal or the actor is not cleared for it,
    /// [`TaskServiceError::Contention`] when concurrent writers exhaust the
    /// retry budget, and port errors unchanged.
    pub async fn change_status(&self, request: ChangeStatusRequest) -> TaskServiceResult<Task> {
        let actor = self.require_employee(request.actor).await?;

        for _ in 0..WRITE_ATTEMPTS {
            let mut task = self
                .require_task(request.project_id, request.task_id)
                .await?;
            let expected = task.status();
            let creator_role = self.creator_role(task.assigned_by()).await?;

            let ctx = StatusChangeContext {
                actor: &actor,
                task: &task,
                creator_role,
                requested: request.status,
                comment: request.comment.as_deref(),
            };
            let change = self
                .engine
                .authorize_status_change(&ctx)
                .inspect_err(|rejection| {
                    debug!(
                        actor = %request.actor,
                        task_id = %request.task_id,
                        %rejection,
                        "status change rejected",
                    );
                })?;

            task.apply_status_change(change, &*self.clock);
            match self.store.update_if_status(&task, expected).await? {
                WriteOutcome::Applied => {
                    info!(task_id = %task.id(), status = %task.status(), "task status changed");
                    return Ok(task);
                }
                WriteOutcome::Conflict { .. } => {}
            }
        }
        Err(TaskServiceError::Contention(request.task_id))
    }

    /// Lists the project's tasks the actor may see, filtered and ordered.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Rejected`] when the actor or project is
    /// unknown or the actor is outside the domain department, and port
    /// errors unchanged.
    pub async fn list_tasks(&self, request: ListTasksRequest) -> TaskServiceResult<Vec<Task>> {
        let actor = self.require_employee(request.actor).await?;
        self.engine.require_in_domain(&actor)?;
        let project = self.require_project(request.project_id).await?;

        let scope = self.visibility_scope(&actor).await?;
        let mut tasks = self.store.list_by_project(project.id).await?;
        tasks.retain(|task| scope.includes(task.assigned_to()) && request.filters.matches(task));
        request.ordering.sort(&mut tasks);
        Ok(tasks)
    }

    /// Finds a single task if it exists and the actor may see it.
    ///
    /// Returns `Ok(None)` both when the task is absent from the project and
    /// when it falls outside the actor's visibility scope, so callers
    /// cannot distinguish hidden tasks from missing ones.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Rejected`] when the actor is unknown or
    /// outside the domain department, and port errors unchanged.
    pub async fn find_visible_task(
        &self,
        actor_id: EmployeeId,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TaskServiceResult<Option<Task>> {
        let actor = self.require_employee(actor_id).await?;
        self.engine.require_in_domain(&actor)?;

        let Some(task) = self
            .store
            .find_by_id(task_id)
            .await?
            .filter(|candidate| candidate.project_id() == project_id)
        else {
            return Ok(None);
        };

        let scope = self.visibility_scope(&actor).await?;
        if scope.includes(task.assigned_to()) {
            Ok(Some(task))
        } else {
            Ok(None)
        }
    }

    /// Resolves the actor's listing scope from their role.
    ///
    /// Team membership is read from the directory at call time.
    async fn visibility_scope(&self, actor: &Employee) -> TaskServiceResult<VisibilityScope> {
        let scope = match actor.role {
            Role::DepManager | Role::UnitHead => VisibilityScope::Domain,
            Role::TeamLead => VisibilityScope::Team(self.team_member_ids(actor.id).await?),
            Role::Senior | Role::Junior => VisibilityScope::Own(actor.id),
        };
        Ok(scope)
    }

    /// Looks up an employee, rejecting when the directory has no record.
    async fn require_employee(&self, id: EmployeeId) -> TaskServiceResult<Employee> {
        let employee = self
            .directory
            .find_employee(id)
            .await?
            .ok_or(TaskRejection::EmployeeNotFound(id))?;
        Ok(employee)
    }

    /// Looks up a project, rejecting when the registry has no record.
    async fn require_project(&self, id: ProjectId) -> TaskServiceResult<Project> {
        let project = self
            .projects
            .find_project(id)
            .await?
            .ok_or(TaskRejection::ProjectNotFound(id))?;
        Ok(project)
    }

    /// Looks up a task within a project, rejecting when absent.
    async fn require_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TaskServiceResult<Task> {
        let task = self
            .store
            .find_by_id(task_id)
            .await?
            .filter(|task| task.project_id() == project_id)
            .ok_or(TaskRejection::TaskNotFound(task_id))?;
        Ok(task)
    }

    /// Resolves the role of a task's creator, if the directory still knows
    /// them.
    async fn creator_role(&self, creator_id: EmployeeId) -> TaskServiceResult<Option<Role>> {
        let role = self
            .directory
            .find_employee(creator_id)
            .await?
            .map(|creator| creator.role);
        Ok(role)
    }

    /// Collects the identifiers of the lead's current team members.
    async fn team_member_ids(&self, lead: EmployeeId) -> TaskServiceResult<Vec<EmployeeId>> {
        let members = self.directory.list_team_members(lead).await?;
        Ok(members.into_iter().map(|member| member.id).collect())
    }
}
