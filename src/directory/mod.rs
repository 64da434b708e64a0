//! Employee directory context.
//!
//! Employees, their roles, and their reporting lines are owned by an
//! external corporate directory. This module models the records the task
//! core reads, the role hierarchy used for authorization decisions, and the
//! port those records arrive through. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
