//! Project task lifecycle management.
//!
//! Implements the task state machine, the assignment scope validator, the
//! hierarchy-aware authorization engine, and the lifecycle service that
//! orchestrates them over the directory, registry, and store ports. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Authorization rules in [`authz`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod authz;
pub mod domain;
pub mod ports;
pub mod services;
