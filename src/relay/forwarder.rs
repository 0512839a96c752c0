//! Outbound request forwarding.
//!
//! # Responsibilities
//! - Hold the shared HTTP client for the upstream origin
//! - Build the outbound request: method, headers, body policy
//! - Make exactly one attempt per inbound request, no retries
//!
//! # Design Decisions
//! - Outbound requests always declare `Content-Type: application/json` unless
//!   the caller overrides it, and always send `Cache-Control: no-store` so no
//!   intermediary serves stale API data
//! - POST and PUT bodies are normalized to JSON: bytes that do not parse are
//!   replaced with an empty object instead of failing the request
//! - GET and DELETE never carry a body, whatever the client sent

use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, Response};
use hyper::body::Incoming;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::http::request::X_REQUEST_ID;
use crate::relay::error::RelayError;
use crate::relay::request::RelayRequest;
use crate::relay::resolver::UpstreamTarget;

/// HTTP client wrapper for the single upstream origin.
#[derive(Clone)]
pub struct Forwarder {
    client: Client<HttpConnector, Body>,
}

impl Forwarder {
    pub fn new() -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client }
    }

    /// Send one request to `target` and return the raw upstream response.
    pub async fn forward(
        &self,
        target: &UpstreamTarget,
        request: &RelayRequest,
    ) -> Result<Response<Incoming>, RelayError> {
        let content_type = request
            .content_type
            .clone()
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));

        let mut builder = Request::builder()
            .method(request.method.clone())
            .uri(target.as_str())
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

        if let Some(authorization) = &request.authorization {
            builder = builder.header(header::AUTHORIZATION, authorization.clone());
        }
        if let Some(request_id) = &request.request_id {
            builder = builder.header(X_REQUEST_ID, request_id.clone());
        }

        let body = match request.method {
            Method::POST | Method::PUT => {
                Body::from(outbound_json_body(request.body.as_deref()))
            }
            _ => Body::empty(),
        };

        let outbound = builder.body(body).map_err(|source| RelayError::BadTarget {
            url: target.as_str().to_string(),
            source,
        })?;

        let response = self.client.request(outbound).await?;
        Ok(response)
    }
}

impl Default for Forwarder {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize the outbound body, substituting `{}` for anything unparsable.
///
/// Absent bodies, truncated reads and non-JSON payloads all collapse to the
/// empty object; the upstream always receives valid JSON on POST and PUT.
pub(crate) fn outbound_json_body(raw: Option<&[u8]>) -> Vec<u8> {
    let value: serde_json::Value = raw
        .and_then(|bytes| serde_json::from_slice(bytes).ok())
        .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));
    serde_json::to_vec(&value).unwrap_or_else(|_| b"{}".to_vec())
}
