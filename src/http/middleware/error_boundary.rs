//! Error containment.
//!
//! Two halves:
//! - `panic_response` turns a handler panic into a failed response (used
//!   with `CatchPanicLayer`, innermost, so `response_time` still sees it)
//! - `error_boundary` sits outside `response_time` and turns any response
//!   flagged with `HandlerFailure` into the generic 500, logging the cause
//!
//! Bodies are fully buffered before they leave a handler, so a failure can
//! never surface after the response has started streaming.

use std::any::Any;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::http::request::X_REQUEST_ID;
use crate::http::response::{failure_response, HandlerFailure, FAILURE_MESSAGE};
use crate::observability::metrics;

pub async fn error_boundary(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let Some(failure) = response.extensions().get::<HandlerFailure>().cloned() else {
        return response;
    };

    tracing::error!(
        request_id = %request_id,
        path = %path,
        kind = failure.kind,
        error = %failure.cause,
        "Request failed"
    );
    metrics::record_failure(failure.kind);

    contain(response)
}

// Keep headers set further down (Response-Time, request id), replace the rest.
fn contain(response: Response) -> Response {
    let (mut parts, _) = response.into_parts();
    parts.status = StatusCode::INTERNAL_SERVER_ERROR;
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    parts.extensions.remove::<HandlerFailure>();
    Response::from_parts(parts, Body::from(FAILURE_MESSAGE))
}

pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail: Arc<str> = if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).into()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str().into()
    } else {
        "unknown panic".into()
    };

    let mut response = failure_response();
    response.extensions_mut().insert(HandlerFailure {
        kind: "panic",
        cause: detail,
    });
    response
}
