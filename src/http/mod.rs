//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware chain)
//!     → middleware/ (security headers, error boundary, timing, static files)
//!     → request.rs (request ID, RequestContext extraction)
//!     → [routing: ping | render pipeline]
//!     → response.rs (failure mapping)
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestContext, UuidRequestId, X_REQUEST_ID};
pub use response::{HandlerFailure, FAILURE_MESSAGE};
pub use server::HttpServer;
