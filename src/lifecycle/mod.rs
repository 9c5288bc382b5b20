//! Lifecycle management.
//!
//! # Design Decisions
//! - Single broadcast channel coordinates shutdown across tasks
//! - Signal handling lives in main; subsystems only subscribe

pub mod shutdown;

pub use shutdown::Shutdown;
