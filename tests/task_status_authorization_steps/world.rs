//! Shared world state for task status authorization BDD scenarios.

use std::sync::Arc;

use chargehand::directory::adapters::InMemoryEmployeeDirectory;
use chargehand::directory::domain::{DepartmentId, Employee, EmployeeId, Role};
use chargehand::project::adapters::InMemoryProjectRegistry;
use chargehand::project::domain::{Project, ProjectId, ProjectStatus};
use chargehand::task::{
    adapters::memory::InMemoryTaskStore,
    authz::DomainDepartment,
    domain::Task,
    services::{TaskLifecycleService, TaskServiceError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<
    InMemoryEmployeeDirectory,
    InMemoryProjectRegistry,
    InMemoryTaskStore,
    DefaultClock,
>;

/// Department the scenario roster belongs to.
pub const PRODUCTION: DepartmentId = DepartmentId::new(7);
/// Project every scenario task belongs to.
pub const PROJECT: ProjectId = ProjectId::new(31);

/// Scenario world for status authorization behaviour tests.
pub struct StatusAuthorizationWorld {
    pub directory: InMemoryEmployeeDirectory,
    pub projects: InMemoryProjectRegistry,
    pub service: TestTaskService,
    pub task: Option<Task>,
    pub last_result: Option<Result<Task, TaskServiceError>>,
}

impl StatusAuthorizationWorld {
    /// Creates a world with empty adapters and no pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let directory = InMemoryEmployeeDirectory::new();
        let projects = InMemoryProjectRegistry::new();
        let service = TaskLifecycleService::new(
            Arc::new(directory.clone()),
            Arc::new(projects.clone()),
            Arc::new(InMemoryTaskStore::new()),
            Arc::new(DefaultClock),
            DomainDepartment::new(PRODUCTION),
        );

        Self {
            directory,
            projects,
            service,
            task: None,
            last_result: None,
        }
    }

    /// Seeds the fixed scenario roster and an open project.
    ///
    /// Employee 1 manages the department, employees 2 and 12 head units,
    /// employee 3 leads a team, and employees 4 and 6 report to that lead.
    ///
    /// # Errors
    ///
    /// Returns an error if seeding an adapter fails.
    pub fn seed_roster(&self) -> Result<(), eyre::Report> {
        let roster = [
            Employee::new(EmployeeId::new(1), Role::DepManager, PRODUCTION),
            Employee::new(EmployeeId::new(2), Role::UnitHead, PRODUCTION),
            Employee::new(EmployeeId::new(12), Role::UnitHead, PRODUCTION),
            Employee::new(EmployeeId::new(3), Role::TeamLead, PRODUCTION),
            Employee::new(EmployeeId::new(4), Role::Senior, PRODUCTION)
                .with_team_lead(EmployeeId::new(3)),
            Employee::new(EmployeeId::new(6), Role::Junior, PRODUCTION)
                .with_team_lead(EmployeeId::new(3)),
        ];
        for employee in roster {
            self.directory.upsert(employee)?;
        }
        self.projects
            .upsert(Project::new(PROJECT, ProjectStatus::InProgress))?;
        Ok(())
    }
}

impl Default for StatusAuthorizationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StatusAuthorizationWorld {
    StatusAuthorizationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
