//! Project registry context.
//!
//! Projects are owned by an external registry; the task core only needs to
//! know that a project exists and whether its status still admits new work.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
