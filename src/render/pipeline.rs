//! Request-to-render pipeline.
//!
//! # Data Flow
//! ```text
//! RequestContext
//!     → Application::create_store (fresh, request-scoped)
//!     → subscribe + first snapshot, bounded by the render timeout
//!     → Application::render (synchronous: markup + head metadata)
//!     → RenderedDocument (view + serialized snapshot)
//!     → ViewTemplate::render
//!     → HTML body
//! ```
//!
//! # Design Decisions
//! - The only await is the first snapshot; everything after it is sync
//! - Head metadata is returned by value from the render call, so
//!   concurrent requests cannot observe each other's metadata
//! - A timed-out or failed subscription is dropped, which unsubscribes it

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;

use super::document::RenderedDocument;
use super::error::RenderError;
use super::template::ViewTemplate;
use crate::app::Application;
use crate::http::RequestContext;
use crate::store::{First, StateStore};

/// Object-safe entry point used by the HTTP layer.
pub trait PageRenderer: Send + Sync + 'static {
    fn render_page<'a>(&'a self, ctx: &'a RequestContext) -> PageFuture<'a>;
}

/// Future returned by [`PageRenderer::render_page`].
pub type PageFuture<'a> = BoxFuture<'a, Result<String, RenderError>>;

/// Renders pages for one application against one template.
pub struct RenderPipeline<A> {
    app: Arc<A>,
    template: Arc<ViewTemplate>,
    timeout: Duration,
}

impl<A: Application> RenderPipeline<A> {
    pub fn new(app: Arc<A>, template: Arc<ViewTemplate>, timeout: Duration) -> Self {
        Self {
            app,
            template,
            timeout,
        }
    }

    /// Run the pipeline for one request and return the final HTML body.
    pub async fn render(&self, ctx: &RequestContext) -> Result<String, RenderError> {
        let store = self.app.create_store(ctx);
        let state = first_snapshot(store, self.timeout).await?;

        let view = self.app.render(&state, ctx);
        let document = RenderedDocument::new(view, &state)?;
        let body = self.template.render(&document)?;

        tracing::debug!(
            request_id = %ctx.request_id,
            path = %ctx.path(),
            bytes = body.len(),
            "Page rendered"
        );
        Ok(body)
    }
}

impl<A: Application> PageRenderer for RenderPipeline<A> {
    fn render_page<'a>(&'a self, ctx: &'a RequestContext) -> PageFuture<'a> {
        Box::pin(self.render(ctx))
    }
}

/// Wait for the store's first snapshot, or fail.
pub async fn first_snapshot<S>(
    store: StateStore<S>,
    timeout: Duration,
) -> Result<S, RenderError> {
    match tokio::time::timeout(timeout, store.subscribe().first()).await {
        Ok(First::Value(state)) => Ok(state),
        Ok(First::Completed) => Err(RenderError::EmptyState),
        Ok(First::Failed(error)) => Err(RenderError::Stream(error)),
        Err(_) => Err(RenderError::Timeout(timeout)),
    }
}
