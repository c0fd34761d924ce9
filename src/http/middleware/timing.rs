//! Response timing.

use std::time::{Duration, Instant};

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::observability::metrics;

pub const RESPONSE_TIME: HeaderName = HeaderName::from_static("response-time");

/// Sets `Response-Time: <ms>ms` on whatever the rest of the chain returns.
pub async fn response_time(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();

    let mut response = next.run(request).await;

    let elapsed = start.elapsed();
    if let Ok(value) = HeaderValue::from_str(&format_elapsed(elapsed)) {
        response.headers_mut().insert(RESPONSE_TIME, value);
    }
    metrics::record_request(method.as_str(), response.status().as_u16(), elapsed);

    response
}

/// Microsecond-resolution milliseconds, e.g. `12.345ms`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3}ms", elapsed.as_micros() as f64 / 1e3)
}

/// Inverse of `format_elapsed`.
pub fn parse_elapsed(value: &str) -> Option<f64> {
    value.strip_suffix("ms")?.parse().ok()
}
