//! Request ID middleware for correlating logs with requests.
//!
//! Every request, including ones that end in the default 404, runs inside a
//! `request` span carrying a fresh UUID v4. Status and duration are recorded
//! on the span once the inner service answers. The response passes through
//! untouched.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{field, Instrument};
use uuid::Uuid;

/// Wrap the request in a span and log its completion.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
        status = field::Empty,
        duration_ms = field::Empty,
    );

    let start = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;

    span.record("status", status);
    span.record("duration_ms", duration_ms);
    span.in_scope(|| log_completion(status, duration_ms));

    response
}

fn log_completion(status: u16, duration_ms: u64) {
    if status >= 500 {
        tracing::warn!(status, duration_ms, "Request failed");
    } else {
        tracing::info!(status, duration_ms, "Request completed");
    }
}
