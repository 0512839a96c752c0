//! Transport-neutral request representation.

use axum::http::{HeaderValue, Method};
use bytes::Bytes;

/// One inbound request, reduced to exactly what the relay forwards.
///
/// Hosting adapters build this from their own transport types; nothing else
/// from the inbound request (headers, cookies, extensions) ever reaches the
/// upstream.
#[derive(Debug, Clone)]
pub struct RelayRequest {
    /// Inbound HTTP method.
    pub method: Method,
    /// Raw path segments below the relay's mount point, still encoded.
    pub path: Vec<String>,
    /// Raw query string without the leading `?`.
    pub query: Option<String>,
    /// `Authorization` header, forwarded byte for byte when present.
    pub authorization: Option<HeaderValue>,
    /// Explicit outbound `Content-Type`; `application/json` when absent.
    pub content_type: Option<HeaderValue>,
    /// Correlation ID to propagate upstream.
    pub request_id: Option<HeaderValue>,
    /// Buffered inbound body; only consulted for POST and PUT.
    pub body: Option<Bytes>,
}

impl RelayRequest {
    /// A bare request with no headers and no body.
    pub fn new(method: Method, path: Vec<String>) -> Self {
        Self {
            method,
            path,
            query: None,
            authorization: None,
            content_type: None,
            request_id: None,
            body: None,
        }
    }
}
