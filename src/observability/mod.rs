//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Request ID flows through all request-scoped events
//! - Per-request spans come from tower-http's TraceLayer

pub mod logging;
