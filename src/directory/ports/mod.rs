//! Port contracts for the employee directory.
//!
//! Ports define infrastructure-agnostic interfaces used to resolve employee
//! records and reporting lines.

pub mod employee;

pub use employee::{EmployeeDirectory, EmployeeDirectoryError, EmployeeDirectoryResult};
