//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up the middleware chain in order
//! - Bind server to listener
//! - Graceful shutdown

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
};

use crate::config::ServerConfig;
use crate::http::middleware::{
    error_boundary, panic_response, response_time, security_headers, serve_static,
    SecurityHeaders, StaticFiles,
};
use crate::http::request::UuidRequestId;
use crate::observability::tracing::http_trace_layer;
use crate::render::PageRenderer;
use crate::routing;

/// HTTP server for the render pipeline.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig, renderer: Arc<dyn PageRenderer>) -> Self {
        let router = Self::build_router(&config, renderer);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers added last run first, so this reads inside-out.
    fn build_router(config: &ServerConfig, renderer: Arc<dyn PageRenderer>) -> Router {
        let mut router = routing::routes(renderer);

        if config.static_files.enabled {
            let files = StaticFiles::new(&config.static_files.root);
            router = router.layer(middleware::from_fn_with_state(files, serve_static));
        }

        router
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(middleware::from_fn(response_time))
            .layer(middleware::from_fn(error_boundary))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(http_trace_layer())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
            .layer(middleware::from_fn_with_state(
                SecurityHeaders::from_config(&config.security),
                security_headers,
            ))
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            static_root = %self.config.static_files.root,
            render_timeout_ms = self.config.render.timeout_ms,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::WelcomeApp;
    use crate::render::{RenderPipeline, ViewTemplate};
    use axum::{body::Body, http::Request, http::StatusCode};
    use std::time::Duration;
    use tower::ServiceExt;

    fn server() -> HttpServer {
        let mut config = ServerConfig::default();
        config.static_files.enabled = false;
        let pipeline = RenderPipeline::new(
            Arc::new(WelcomeApp::default()),
            Arc::new(ViewTemplate::load(None).unwrap()),
            Duration::from_secs(1),
        );
        HttpServer::new(config, Arc::new(pipeline))
    }

    #[tokio::test]
    async fn test_chain_decorates_ping() {
        let response = server()
            .router()
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert!(headers.contains_key("response-time"));
        assert!(headers.contains_key("x-request-id"));
        assert_eq!(headers["x-content-type-options"], "nosniff");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, "pong");
    }

    #[tokio::test]
    async fn test_chain_renders_welcome_page() {
        let response = server()
            .router()
            .oneshot(Request::get("/hello").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("<title>Welcome</title>"));
        assert!(body.contains("<code>/hello</code>"));
    }
}
