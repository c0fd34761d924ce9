//! Static asset responder.
//!
//! Serves `GET`/`HEAD` requests whose path names a regular file under the
//! static root; everything else falls through to the router. Percent-decoding
//! and traversal checks are left to `ServeDir`.

use std::convert::Infallible;
use std::future::Future;
use std::path::Path;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

#[derive(Debug, Clone)]
pub struct StaticFiles {
    dir: ServeDir,
}

impl StaticFiles {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            // Directories report not-found, so they reach the router.
            dir: ServeDir::new(root).append_index_html_on_directories(false),
        }
    }

    /// Answer `request` from the static root, or `None` if no file matches.
    ///
    /// The returned future does not borrow `request` (whose body is not
    /// `Sync`), so it stays `Send`.
    pub fn lookup(&self, request: &Request) -> impl Future<Output = Option<Response>> + Send {
        let mut lookup = Request::new(Body::empty());
        *lookup.method_mut() = request.method().clone();
        *lookup.uri_mut() = request.uri().clone();
        *lookup.headers_mut() = request.headers().clone();
        let dir = self.dir.clone();

        async move {
            let served: Result<_, Infallible> = dir.oneshot(lookup).await;
            let response = match served {
                Ok(response) => response,
                Err(never) => match never {},
            };

            (response.status() != StatusCode::NOT_FOUND).then(|| response.into_response())
        }
    }
}

pub async fn serve_static(
    State(files): State<StaticFiles>,
    request: Request,
    next: Next,
) -> Response {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return next.run(request).await;
    }

    match files.lookup(&request).await {
        Some(response) => {
            tracing::trace!(path = %request.uri().path(), "Served static file");
            response
        }
        None => next.run(request).await,
    }
}
