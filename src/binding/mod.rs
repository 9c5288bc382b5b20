//! Explicit parameter binding.
//!
//! # Data Flow
//! ```text
//! Incoming request (query string, cookies, path segments)
//!     → contract.rs (per-route parameter contract)
//!     → bind: validate presence, apply defaults, convert types
//!     → Return: BoundParams or BindError (HTTP 400)
//!
//! Contract declaration (per route, at compile time):
//!     ParamSpec[] (name, kind, requirement)
//!     → QueryContract
//!     → handlers bind before any handler logic runs
//! ```
//!
//! # Design Decisions
//! - Contracts are declared next to the handler they guard
//! - Binding runs to completion before the handler body executes
//! - Conversion failures are reported with the offending value
//! - Route and method mismatches are the router's job, not the binder's

pub mod contract;
pub mod error;

pub use contract::{BoundParams, ParamKind, ParamSpec, QueryContract, Requirement};
pub use error::BindError;
