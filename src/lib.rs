//! Server-side render server.
//!
//! Answers `GET` requests with a fully rendered HTML document: a fresh
//! state store per request, the first settled snapshot, a synchronous
//! render, and template assembly, behind a small ordered middleware chain.

// Core subsystems
pub mod app;
pub mod config;
pub mod http;
pub mod render;
pub mod routing;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use app::Application;
pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use render::{RenderError, RenderPipeline};
pub use store::{StateStore, StoreError, StoreHandle};
