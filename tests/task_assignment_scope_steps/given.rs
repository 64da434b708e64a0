//! Given steps for task assignment scope BDD scenarios.

use rstest_bdd_macros::given;

use super::world::AssignmentScopeWorld;

#[given("the production department roster")]
fn production_roster(world: &mut AssignmentScopeWorld) -> Result<(), eyre::Report> {
    world.seed_roster()
}
