//! Request identity and correlation.
//!
//! # Responsibilities
//! - Assign a unique request ID (UUID v4) as early as possible
//! - Honor an inbound `x-request-id` when the caller already set one
//! - Expose the ID to handlers through request extensions
//!
//! # Design Decisions
//! - The ID lives both in the headers (so the forwarder can propagate it
//!   upstream) and in extensions (so handlers never re-parse headers)
//! - Plain Tower layer, no per-request allocation beyond the ID itself

use std::fmt;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Correlation ID attached to each inbound request.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convenience accessor for the correlation ID on a request.
pub trait RequestIdExt {
    fn request_id(&self) -> Option<&str>;
}

impl RequestIdExt for Request<Body> {
    fn request_id(&self) -> Option<&str> {
        self.extensions().get::<RequestId>().map(|id| id.0.as_str())
    }
}

/// Tower layer that stamps `x-request-id` onto every inbound request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service produced by [`RequestIdLayer`].
#[derive(Debug, Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for RequestIdService<S>
where
    S: Service<Request<Body>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Body>) -> Self::Future {
        let id = ensure_request_id(&mut request);
        request.extensions_mut().insert(id);
        self.inner.call(request)
    }
}

/// Reuse the caller's ID when present, otherwise generate and stamp one.
fn ensure_request_id(request: &mut Request<Body>) -> RequestId {
    if let Some(existing) = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
    {
        return RequestId(existing.to_string());
    }

    let generated = Uuid::new_v4().to_string();
    if let Ok(value) = HeaderValue::from_str(&generated) {
        request.headers_mut().insert(X_REQUEST_ID, value);
    }
    RequestId(generated)
}
