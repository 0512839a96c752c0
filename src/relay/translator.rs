//! Upstream response translation.
//!
//! # Responsibilities
//! - Buffer the upstream body and classify it by content type
//! - Preserve the upstream status code exactly, success or error
//! - Attach the CORS policy headers to every translated response
//!
//! # Design Decisions
//! - Classification trusts the upstream `Content-Type` first and the bytes
//!   second: a declared-JSON body that fails to parse degrades to verbatim
//!   text instead of failing the request
//! - Text payloads stay `Bytes`, never `String`, so pass-through is
//!   byte-identical even for invalid UTF-8

use axum::http::{header, HeaderMap, Method, Response, StatusCode};
use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;
use serde_json::Value;

use crate::relay::error::{failure_message, RelayError};
use crate::relay::policy::CorsPolicy;

/// Body of a translated response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Decoded JSON document, re-serialized on render.
    Json(Value),
    /// Verbatim upstream bytes with the content type they arrived under.
    Text { body: Bytes, content_type: String },
    /// No body at all (preflight).
    Empty,
}

/// How a response came to be, for logging and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Preflight short-circuit; the upstream was never contacted.
    Preflight,
    /// Upstream response passed through, whatever its status.
    Upstream,
    /// Transport failure synthesized into a generic error body.
    Error,
}

impl ResponseKind {
    pub fn as_label(&self) -> &'static str {
        match self {
            ResponseKind::Preflight => "preflight",
            ResponseKind::Upstream => "upstream",
            ResponseKind::Error => "error",
        }
    }
}

/// A finished relay response, ready for any hosting adapter to render.
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub payload: Payload,
    pub cors: HeaderMap,
    pub kind: ResponseKind,
}

impl RelayResponse {
    /// Empty 200 closing a CORS preflight without touching the upstream.
    pub fn preflight(policy: &CorsPolicy) -> Self {
        Self {
            status: StatusCode::OK,
            payload: Payload::Empty,
            cors: policy.headers(),
            kind: ResponseKind::Preflight,
        }
    }

    /// Generic 500 for a transport-level failure, phrased per verb.
    pub fn upstream_failure(method: &Method, policy: &CorsPolicy) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            payload: Payload::Json(serde_json::json!({ "error": failure_message(method) })),
            cors: policy.headers(),
            kind: ResponseKind::Error,
        }
    }
}

/// Buffer and classify one upstream response.
///
/// A body that fails to transfer is a [`RelayError`]; a body that merely
/// fails to parse falls back to verbatim text.
pub async fn translate(
    response: Response<Incoming>,
    policy: &CorsPolicy,
) -> Result<RelayResponse, RelayError> {
    let (parts, body) = response.into_parts();

    let content_type = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let bytes = body.collect().await?.to_bytes();

    Ok(RelayResponse {
        status: parts.status,
        payload: classify(content_type.as_deref(), bytes),
        cors: policy.headers(),
        kind: ResponseKind::Upstream,
    })
}

/// Decide how a body travels back: JSON when the upstream says so and the
/// bytes agree, verbatim text otherwise. A missing content type is treated
/// as plain text.
pub(crate) fn classify(content_type: Option<&str>, bytes: Bytes) -> Payload {
    match content_type {
        Some(declared) if declared.contains("application/json") => {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(value) => Payload::Json(value),
                Err(_) => Payload::Text {
                    body: bytes,
                    content_type: declared.to_string(),
                },
            }
        }
        Some(declared) => Payload::Text {
            body: bytes,
            content_type: declared.to_string(),
        },
        None => Payload::Text {
            body: bytes,
            content_type: "text/plain".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_json_that_parses_is_decoded() {
        let payload = classify(
            Some("application/json; charset=utf-8"),
            Bytes::from_static(br#"{"lessons": []}"#),
        );
        assert_eq!(payload, Payload::Json(serde_json::json!({ "lessons": [] })));
    }

    #[test]
    fn declared_json_that_does_not_parse_degrades_to_text() {
        let payload = classify(Some("application/json"), Bytes::from_static(b"{oops"));
        assert_eq!(
            payload,
            Payload::Text {
                body: Bytes::from_static(b"{oops"),
                content_type: "application/json".to_string(),
            }
        );
    }

    #[test]
    fn html_stays_verbatim_under_its_own_content_type() {
        let payload = classify(
            Some("text/html"),
            Bytes::from_static(b"<html>not found</html>"),
        );
        assert_eq!(
            payload,
            Payload::Text {
                body: Bytes::from_static(b"<html>not found</html>"),
                content_type: "text/html".to_string(),
            }
        );
    }

    #[test]
    fn missing_content_type_defaults_to_plain_text() {
        let payload = classify(None, Bytes::from_static(b"pong"));
        assert_eq!(
            payload,
            Payload::Text {
                body: Bytes::from_static(b"pong"),
                content_type: "text/plain".to_string(),
            }
        );
    }

    #[test]
    fn invalid_utf8_survives_classification_untouched() {
        let raw = Bytes::from_static(&[0xff, 0xfe, 0x00, 0x41]);
        let payload = classify(Some("application/octet-stream"), raw.clone());
        assert_eq!(
            payload,
            Payload::Text {
                body: raw,
                content_type: "application/octet-stream".to_string(),
            }
        );
    }

    #[test]
    fn upstream_failure_body_names_the_verb() {
        let policy = CorsPolicy::default();
        let response = RelayResponse::upstream_failure(&Method::DELETE, &policy);
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.kind, ResponseKind::Error);
        assert_eq!(
            response.payload,
            Payload::Json(serde_json::json!({ "error": "Failed to delete data on API" }))
        );
        assert!(response
            .cors
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[test]
    fn preflight_is_an_empty_ok() {
        let response = RelayResponse::preflight(&CorsPolicy::default());
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.payload, Payload::Empty);
        assert_eq!(response.kind, ResponseKind::Preflight);
    }
}
