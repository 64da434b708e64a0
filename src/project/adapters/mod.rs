//! Adapter implementations for the project registry ports.

mod memory;

pub use memory::InMemoryProjectRegistry;
