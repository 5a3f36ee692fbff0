//! Request timing middleware.
//!
//! Logs how long each request took and reports it to the client in the
//! `x-response-time-ms` header.

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};

/// Header carrying the handler duration in whole milliseconds.
pub const RESPONSE_TIME_HEADER: HeaderName = HeaderName::from_static("x-response-time-ms");

/// Requests slower than this are logged at `warn`.
pub const SLOW_REQUEST: Duration = Duration::from_millis(100);

/// Times a request, logs it, and stamps the duration on the response.
///
/// Install with `axum::middleware::from_fn(request_timing)`.
pub async fn request_timing(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let mut response = next.run(request).await;

    let elapsed = start.elapsed();
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    let status = response.status().as_u16();

    if elapsed > SLOW_REQUEST {
        tracing::warn!(%method, %path, status, duration_ms, "Slow request");
    } else {
        tracing::debug!(%method, %path, status, duration_ms, "Request completed");
    }

    response
        .headers_mut()
        .insert(RESPONSE_TIME_HEADER, HeaderValue::from(duration_ms));
    response
}
