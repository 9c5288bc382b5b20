//! Domain model types.

pub mod employee;

pub use employee::Employee;
