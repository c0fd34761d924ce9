//! Server-side render subsystem.
//!
//! # Data Flow
//! ```text
//! pipeline.rs (store → first snapshot → render)
//!     → document.rs (view + serialized snapshot)
//!     → template.rs (placeholder substitution)
//!     → HTML body
//! ```

pub mod document;
pub mod error;
pub mod head;
pub mod pipeline;
pub mod template;

pub use document::{RenderedDocument, View};
pub use error::{RenderError, TemplateError};
pub use head::{escape_html, HeadContent};
pub use pipeline::{first_snapshot, PageFuture, PageRenderer, RenderPipeline};
pub use template::{TemplateSlots, ViewTemplate, DEFAULT_TEMPLATE};
