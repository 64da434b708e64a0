//! Shared world state for task assignment scope BDD scenarios.

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
/// Department outside the managed domain.
pub const SALES: DepartmentId = DepartmentId::new(9);
/// Open project scenario tasks are created in.
pub const PROJECT: ProjectId = ProjectId::new(31);
/// Project that has already been closed out.
pub const CLOSED_PROJECT: ProjectId = ProjectId::new(40);

/// Scenario world for assignment scope behaviour tests.
pub struct AssignmentScopeWorld {
    pub directory: InMemoryEmployeeDirectory,
    pub projects: InMemoryProjectRegistry,
    pub service: TestTaskService,
    pub last_result: Option<Result<Task, TaskServiceError>>,
}

impl AssignmentScopeWorld {
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
            last_result: None,
        }
    }

    /// Seeds two production teams, a sales outsider, and two projects.
    ///
    /// Employee 3 leads employees 4 and 6, employee 30 leads employee 33,
    /// and employee 90 belongs to the sales department.
    ///
    /// # Errors
    ///
    /// Returns an error if seeding an adapter fails.
    pub fn seed_roster(&self) -> Result<(), eyre::Report> {
        let roster = [
            Employee::new(EmployeeId::new(1), Role::DepManager, PRODUCTION),
            Employee::new(EmployeeId::new(2), Role::UnitHead, PRODUCTION),
            Employee::new(EmployeeId::new(3), Role::TeamLead, PRODUCTION),
            Employee::new(EmployeeId::new(4), Role::Senior, PRODUCTION)
                .with_team_lead(EmployeeId::new(3)),
            Employee::new(EmployeeId::new(6), Role::Junior, PRODUCTION)
                .with_team_lead(EmployeeId::new(3)),
            Employee::new(EmployeeId::new(30), Role::TeamLead, PRODUCTION),
            Employee::new(EmployeeId::new(33), Role::Senior, PRODUCTION)
                .with_team_lead(EmployeeId::new(30)),
            Employee::new(EmployeeId::new(90), Role::Senior, SALES),
        ];
        for employee in roster {
            self.directory.upsert(employee)?;
        }
        self.projects
            .upsert(Project::new(PROJECT, ProjectStatus::InProgress))?;
        self.projects
            .upsert(Project::new(CLOSED_PROJECT, ProjectStatus::Completed))?;
        Ok(())
    }
}

impl Default for AssignmentScopeWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AssignmentScopeWorld {
    AssignmentScopeWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
