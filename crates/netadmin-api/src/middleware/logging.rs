//! Per-request access log.

use std::time::Instant;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use netadmin_entity::Principal;
use tracing::{info, warn};

/// Logs one line per request once the response is ready.
///
/// Auth rejections are logged at `warn` so repeated failures stand out; the
/// subject is included when the request carried a valid token.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let subject = response
        .extensions()
        .get::<Principal>()
        .map(|p| p.subject_id.to_string());
    let subject = subject.as_deref();

    if matches!(
        response.status(),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
    ) {
        warn!(%method, %path, status, elapsed_ms, subject, "Request rejected");
    } else {
        info!(%method, %path, status, elapsed_ms, subject, "Request handled");
    }

    response
}
