//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID generation)
//!     → routes (dispatch + parameter binding)
//!     → cookies.rs (Cookie header parse / Set-Cookie formatting)
//!     → Send to client
//! ```

pub mod cookies;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::HttpServer;
