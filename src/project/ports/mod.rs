//! Port contracts for the project registry.

pub mod registry;

pub use registry::{ProjectRegistry, ProjectRegistryError, ProjectRegistryResult};
