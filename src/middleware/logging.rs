//! Logging middleware
//!
//! Records HTTP request and response information

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// Request logging middleware
///
/// Records method, path, request id, status and latency for each request
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    async move {
        info!("Request started: {} {}", method, path);

        let response = next.run(request).await;

        let status = response.status();
        let elapsed = start_time.elapsed();

        if status.is_server_error() {
            warn!(
                "Request completed: {} {} - Status: {} - Duration: {:?}",
                method, path, status, elapsed
            );
        } else {
            info!(
                "Request completed: {} {} - Status: {} - Duration: {:?}",
                method, path, status, elapsed
            );
        }

        response
    }
    .instrument(span)
    .await
}
