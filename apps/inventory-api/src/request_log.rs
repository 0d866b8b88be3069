//! Request-level logging.
//!
//! Every request runs inside an `http.request` span; on completion the
//! status and duration are recorded on the span and logged. Client errors
//! log at `warn`.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn, Instrument};

pub async fn request_logging(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let span = tracing::info_span!(
        "http.request",
        method = %method,
        path = %path,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    let response = next.run(req).instrument(span.clone()).await;

    let status = response.status().as_u16();
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    span.record("status", status);
    span.record("duration_ms", duration_ms);

    let _enter = span.enter();
    if response.status().is_client_error() {
        warn!(status, duration_ms, "client error response");
    } else {
        info!(status, duration_ms, "request.completed");
    }

    response
}
