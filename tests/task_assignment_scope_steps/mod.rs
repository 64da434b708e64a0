//! Step definitions for task assignment scope BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
