//! Application seam: the UI tree and the state it renders from.
//!
//! The server knows nothing about an application's state shape. It only
//! asks for a fresh store per request and for a synchronous render of the
//! first snapshot that store produces.

mod welcome;

use serde::Serialize;

use crate::http::RequestContext;
use crate::render::View;
use crate::store::StateStore;

pub use welcome::{WelcomeApp, WelcomeState};

pub trait Application: Send + Sync + 'static {
    /// Snapshot type. Serialized into the document for client hydration.
    type State: Serialize + Send + 'static;

    /// Build the isolated store for one request.
    fn create_store(&self, ctx: &RequestContext) -> StateStore<Self::State>;

    /// Render the UI tree for a settled snapshot. Must not suspend.
    fn render(&self, state: &Self::State, ctx: &RequestContext) -> View;
}
