//! Route table and handlers.
//!
//! # Responsibilities
//! - `GET /ping` → liveness (`pong`), no store, no render
//! - `GET /` and `GET /*` → render pipeline
//!
//! # Design Decisions
//! - Immutable after construction
//! - Other methods on these paths get the framework's 405

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};

use crate::http::RequestContext;
use crate::render::{PageRenderer, RenderError};

/// State shared by the route handlers.
#[derive(Clone)]
pub struct RouteState {
    pub renderer: Arc<dyn PageRenderer>,
}

pub fn routes(renderer: Arc<dyn PageRenderer>) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/", get(render_page))
        .route("/{*path}", get(render_page))
        .with_state(RouteState { renderer })
}

async fn ping() -> &'static str {
    "pong"
}

async fn render_page(
    State(state): State<RouteState>,
    ctx: RequestContext,
) -> Result<Html<String>, RenderError> {
    tracing::debug!(
        request_id = %ctx.request_id,
        path = %ctx.path(),
        "Rendering page"
    );
    state.renderer.render_page(&ctx).await.map(Html)
}
