//! Relay route handlers.
//!
//! # Responsibilities
//! - One handler per HTTP verb under the API mount point
//! - Bind axum request parts to the core's transport-neutral request type
//! - CORS-stamped fallbacks for unknown paths and unsupported methods
//!
//! # Design Decisions
//! - The router is plain data, mountable inside any axum application; the
//!   standalone binaries compose it with their own middleware
//! - Paths are taken from the raw URI, not from decoded extractor captures,
//!   so the upstream sees the client's bytes unchanged

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::config::RelayConfig;
use crate::http::request::X_REQUEST_ID;
use crate::observability::metrics;
use crate::relay::{RelayCore, RelayRequest};

/// Path prefix the relay listens under.
pub const API_PREFIX: &str = "/api";

/// Shared state injected into handlers.
#[derive(Clone)]
pub struct RelayState {
    pub core: Arc<RelayCore>,
    pub max_body_bytes: usize,
}

impl RelayState {
    pub fn from_config(config: &RelayConfig) -> Self {
        Self {
            core: Arc::new(RelayCore::from_config(config)),
            max_body_bytes: config.listener.max_body_bytes,
        }
    }
}

/// Build the relay router.
///
/// Every entrypoint serves exactly this surface: the four data verbs plus
/// preflight under `/api`, a 405 for other verbs there, and a 404 for
/// everything else, all carrying the CORS headers.
pub fn relay_router(state: RelayState) -> Router {
    let verbs = get(relay_get)
        .post(relay_post)
        .put(relay_put)
        .delete(relay_delete)
        .options(relay_preflight)
        .fallback(method_not_allowed);

    Router::new()
        .route("/api", verbs.clone())
        .route("/api/{*path}", verbs)
        .fallback(no_route)
        .with_state(state)
}

async fn relay_get(State(state): State<RelayState>, request: Request<Body>) -> Response {
    relay(state, Method::GET, request).await
}

async fn relay_post(State(state): State<RelayState>, request: Request<Body>) -> Response {
    relay(state, Method::POST, request).await
}

async fn relay_put(State(state): State<RelayState>, request: Request<Body>) -> Response {
    relay(state, Method::PUT, request).await
}

async fn relay_delete(State(state): State<RelayState>, request: Request<Body>) -> Response {
    relay(state, Method::DELETE, request).await
}

async fn relay_preflight(State(state): State<RelayState>, request: Request<Body>) -> Response {
    relay(state, Method::OPTIONS, request).await
}

/// Shared verb plumbing: bind transport parts, run the core, record metrics.
async fn relay(state: RelayState, method: Method, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let method_str = method.to_string();

    let relay_request = into_relay_request(method, request, state.max_body_bytes).await;
    let response = state.core.handle(relay_request).await;

    metrics::record_request(
        &method_str,
        response.status.as_u16(),
        response.kind.as_label(),
        start_time,
    );
    response.into_response()
}

/// Bind an axum request to the relay's request type.
///
/// Only POST and PUT read the body; an unreadable or oversized body is
/// dropped here and becomes the empty-object substitution downstream.
async fn into_relay_request(
    method: Method,
    request: Request<Body>,
    max_body_bytes: usize,
) -> RelayRequest {
    let (parts, body) = request.into_parts();

    let path = api_segments(parts.uri.path());
    let query = parts.uri.query().map(str::to_owned);
    let authorization = parts.headers.get(header::AUTHORIZATION).cloned();
    let request_id = parts.headers.get(X_REQUEST_ID).cloned();

    let body = if matches!(method, Method::POST | Method::PUT) {
        axum::body::to_bytes(body, max_body_bytes).await.ok()
    } else {
        None
    };

    RelayRequest {
        method,
        path,
        query,
        authorization,
        content_type: None,
        request_id,
        body,
    }
}

/// Split the raw (still encoded) path below the API mount into segments.
///
/// Order is preserved and nothing is decoded or deduplicated; the resolver
/// joins the segments back verbatim.
fn api_segments(path: &str) -> Vec<String> {
    let below = path
        .strip_prefix(API_PREFIX)
        .map(|rest| rest.strip_prefix('/').unwrap_or(rest))
        .unwrap_or(path);
    if below.is_empty() {
        return Vec::new();
    }
    below.split('/').map(str::to_owned).collect()
}

/// CORS-stamped 404 for paths outside the relay surface.
async fn no_route(State(state): State<RelayState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    tracing::warn!(
        method = %request.method(),
        path = %request.uri().path(),
        "No matching route"
    );
    let mut response = (StatusCode::NOT_FOUND, "No matching route found").into_response();
    state.core.policy().apply(response.headers_mut());
    metrics::record_request(request.method().as_str(), 404, "no_route", start_time);
    response
}

/// CORS-stamped 405 for verbs outside the relay contract.
async fn method_not_allowed(State(state): State<RelayState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let mut response = (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response();
    state.core.policy().apply(response.headers_mut());
    metrics::record_request(
        request.method().as_str(),
        405,
        "method_not_allowed",
        start_time,
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_below_the_mount_are_split_in_order() {
        assert_eq!(api_segments("/api/lessons/5/steps"), ["lessons", "5", "steps"]);
    }

    #[test]
    fn the_bare_mount_yields_no_segments() {
        assert!(api_segments("/api").is_empty());
        assert!(api_segments("/api/").is_empty());
    }

    #[test]
    fn double_slashes_survive_as_empty_segments() {
        assert_eq!(api_segments("/api/a//b"), ["a", "", "b"]);
    }

    #[test]
    fn encoded_bytes_are_not_decoded() {
        assert_eq!(api_segments("/api/les%20sons"), ["les%20sons"]);
    }
}
