//! Developer proxy diagnostics.
//!
//! Logs every inbound request with its outcome. Only the dev proxy layers
//! this in; the standalone relay relies on the trace layer alone.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::http::request::RequestIdExt;

/// Log one inbound request and the status it resolved to.
pub async fn log_inbound(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request.request_id().map(str::to_owned);

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        request_id = request_id.as_deref().unwrap_or("-"),
        "Inbound request"
    );
    response
}
