//! Per-request application state.
//!
//! # Data Flow
//! ```text
//! Application::create_store (one per request)
//!     → StateStore (push-based stream of snapshots)
//!     → StateStore::subscribe (consumes the store: subscribed at most once)
//!     → Subscription::first (take one item, drop the stream)
//!     → First::{Value, Completed, Failed}
//! ```
//!
//! # Design Decisions
//! - A store is a plain channel-backed container, cheap to build per request
//! - Stores are never shared between requests
//! - Unsubscribing is dropping: the stream is released as soon as the first
//!   item resolves, so producers observe a closed channel

mod error;
mod state;

pub use error::StoreError;
pub use state::{First, StateStore, StoreHandle, StoreStream, Subscription};
