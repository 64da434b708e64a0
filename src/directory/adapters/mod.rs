//! Adapter implementations for the employee directory ports.

mod memory;

pub use memory::InMemoryEmployeeDirectory;
