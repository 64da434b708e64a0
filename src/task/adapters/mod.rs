//! Adapter implementations of the task ports.

pub mod memory;

pub use memory::InMemoryTaskStore;
