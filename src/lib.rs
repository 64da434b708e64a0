//! Chargehand: project task lifecycle management core.
//!
//! This crate decides who may create, see, edit, and progress project tasks
//! within a managed department, and applies the results. Employees and
//! projects are owned by external systems and arrive through ports; every
//! authorization decision is made by pure functions over the data those
//! ports resolve.
//!
//! # Architecture
//!
//! Chargehand follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (directories, stores)
//!
//! # Modules
//!
//! - [`directory`]: Employee records and the role hierarchy
//! - [`project`]: Read-only project registry
//! - [`task`]: Task aggregate, authorization engine, and lifecycle services

pub mod directory;
pub mod project;
pub mod task;
