//! Response handling and error mapping.
//!
//! # Responsibilities
//! - Map render failures to HTTP responses
//! - Carry the failure cause to the error boundary without exposing it
//!
//! # Design Decisions
//! - Clients only ever see the generic failure message
//! - Failures are 500s; the cause travels in response extensions

use std::error::Error;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::render::RenderError;

/// Body sent for every contained failure.
pub const FAILURE_MESSAGE: &str = "There was an error. Please try again later.";

/// Attached to a response whose handler failed.
#[derive(Debug, Clone)]
pub struct HandlerFailure {
    pub kind: &'static str,
    pub cause: Arc<str>,
}

impl From<&RenderError> for HandlerFailure {
    fn from(error: &RenderError) -> Self {
        let mut cause = error.to_string();
        let mut source = error.source();
        while let Some(inner) = source {
            cause.push_str(": ");
            cause.push_str(&inner.to_string());
            source = inner.source();
        }
        Self {
            kind: error.kind(),
            cause: cause.into(),
        }
    }
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        let mut response = failure_response();
        response.extensions_mut().insert(HandlerFailure::from(&self));
        response
    }
}

/// The generic 500 response.
pub fn failure_response() -> Response {
    let mut response = Response::new(Body::from(FAILURE_MESSAGE));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}
