//! Step definitions for task status authorization BDD scenarios.

pub mod when;
pub mod world;
