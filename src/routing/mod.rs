//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Request (method, path) after static assets were ruled out
//!     → router.rs (route lookup)
//!     → ping handler | render handler (→ render pipeline)
//! ```

pub mod router;

pub use router::{routes, RouteState};
