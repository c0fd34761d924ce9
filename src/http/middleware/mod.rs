//! Middleware chain, outermost first:
//!
//! ```text
//! security_headers → error_boundary → response_time → panic catch
//!     → serve_static (may answer) → router
//! ```

pub mod error_boundary;
pub mod security_headers;
pub mod static_files;
pub mod timing;

pub use error_boundary::{error_boundary, panic_response};
pub use security_headers::{security_headers, SecurityHeaders};
pub use static_files::{serve_static, StaticFiles};
pub use timing::{response_time, RESPONSE_TIME};
