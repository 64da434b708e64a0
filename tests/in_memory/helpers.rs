//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use chargehand::directory::adapters::InMemoryEmployeeDirectory;
use chargehand::directory::domain::{DepartmentId, Employee, EmployeeId, Role};
use chargehand::project::adapters::InMemoryProjectRegistry;
use chargehand::project::domain::{Project, ProjectId, ProjectStatus};
use chargehand::task::adapters::memory::InMemoryTaskStore;
use chargehand::task::authz::DomainDepartment;
use chargehand::task::domain::{TaskDifficulty, TaskPriority};
use chargehand::task::services::{CreateTaskRequest, TaskLifecycleService};
use chrono::{Duration, Utc};
use mockable::DefaultClock;
use rstest::fixture;

/// Department the fixture service manages.
pub const PRODUCTION: DepartmentId = DepartmentId::new(7);
/// Department outside the managed domain.
pub const SALES: DepartmentId = DepartmentId::new(9);
/// Open project all fixture tasks belong to.
pub const PROJECT: ProjectId = ProjectId::new(31);
/// Project already closed out at seeding time.
pub const CLOSED_PROJECT: ProjectId = ProjectId::new(40);

/// Department manager of the managed department.
pub const DEP_MANAGER: EmployeeId = EmployeeId::new(1);
/// Unit head in the managed department.
pub const UNIT_HEAD: EmployeeId = EmployeeId::new(2);
/// Second unit head, for escalation tests.
pub const OTHER_UNIT_HEAD: EmployeeId = EmployeeId::new(12);
/// Team lead in the managed department.
pub const TEAM_LEAD: EmployeeId = EmployeeId::new(3);
/// Senior engineer reporting to [`TEAM_LEAD`].
pub const SENIOR: EmployeeId = EmployeeId::new(4);
/// Junior engineer reporting to [`TEAM_LEAD`].
pub const JUNIOR: EmployeeId = EmployeeId::new(6);
/// Team lead of a second team in the managed department.
pub const OTHER_LEAD: EmployeeId = EmployeeId::new(30);
/// Senior engineer reporting to [`OTHER_LEAD`].
pub const OTHER_MEMBER: EmployeeId = EmployeeId::new(33);
/// Employee from the sales department, outside the managed domain.
pub const OUTSIDER: EmployeeId = EmployeeId::new(90);

/// Service type wired entirely to in-memory adapters.
pub type InMemoryService = TaskLifecycleService<
    InMemoryEmployeeDirectory,
    InMemoryProjectRegistry,
    InMemoryTaskStore,
    DefaultClock,
>;

/// Handles onto the seeded adapters backing a service under test.
pub struct Deployment {
    /// Directory adapter the service resolves employees from.
    pub directory: InMemoryEmployeeDirectory,
    /// Registry adapter the service resolves projects from.
    pub projects: InMemoryProjectRegistry,
    /// Store adapter the service persists tasks to.
    pub store: InMemoryTaskStore,
    /// Service under test.
    pub service: InMemoryService,
}

/// Provides a service wired to freshly seeded in-memory adapters.
///
/// The roster covers every role in the managed production department plus
/// one outsider from sales, and the registry holds one open and one closed
/// project.
///
/// # Errors
///
/// Returns an error if seeding an adapter fails.
#[fixture]
pub fn deployment() -> eyre::Result<Deployment> {
    let directory = InMemoryEmployeeDirectory::new();
    let roster = [
        Employee::new(DEP_MANAGER, Role::DepManager, PRODUCTION),
        Employee::new(UNIT_HEAD, Role::UnitHead, PRODUCTION),
        Employee::new(OTHER_UNIT_HEAD, Role::UnitHead, PRODUCTION),
        Employee::new(TEAM_LEAD, Role::TeamLead, PRODUCTION),
        Employee::new(SENIOR, Role::Senior, PRODUCTION).with_team_lead(TEAM_LEAD),
        Employee::new(JUNIOR, Role::Junior, PRODUCTION).with_team_lead(TEAM_LEAD),
        Employee::new(OTHER_LEAD, Role::TeamLead, PRODUCTION),
        Employee::new(OTHER_MEMBER, Role::Senior, PRODUCTION).with_team_lead(OTHER_LEAD),
        Employee::new(OUTSIDER, Role::Senior, SALES),
    ];
    for employee in roster {
        directory.upsert(employee)?;
    }

    let projects = InMemoryProjectRegistry::new();
    projects.upsert(Project::new(PROJECT, ProjectStatus::InProgress))?;
    projects.upsert(Project::new(CLOSED_PROJECT, ProjectStatus::Completed))?;

    let store = InMemoryTaskStore::new();
    let service = TaskLifecycleService::new(
        Arc::new(directory.clone()),
        Arc::new(projects.clone()),
        Arc::new(store.clone()),
        Arc::new(DefaultClock),
        DomainDepartment::new(PRODUCTION),
    );
    Ok(Deployment {
        directory,
        projects,
        store,
        service,
    })
}

/// Builds a creation request with fixture defaults and a week of lead time.
pub fn creation_request(actor: EmployeeId, assignee: EmployeeId, title: &str) -> CreateTaskRequest {
    CreateTaskRequest::new(
        actor,
        PROJECT,
        title,
        assignee,
        TaskPriority::Medium,
        TaskDifficulty::Medium,
        Utc::now() + Duration::days(7),
    )
}
