//! Response rendering.
//!
//! # Responsibilities
//! - Convert a finished relay response into an axum response
//! - Re-serialize JSON payloads, emit text payloads byte for byte
//! - Stamp the CORS headers onto everything that leaves the relay

use axum::body::Body;
use axum::http::{header, HeaderValue, Response};
use axum::response::IntoResponse;

use crate::relay::{Payload, RelayResponse};

impl IntoResponse for RelayResponse {
    fn into_response(self) -> axum::response::Response {
        let mut response = match self.payload {
            Payload::Json(value) => {
                let mut response = axum::Json(value).into_response();
                *response.status_mut() = self.status;
                response
            }
            Payload::Text { body, content_type } => {
                let mut response = Response::new(Body::from(body));
                *response.status_mut() = self.status;
                if let Ok(value) = HeaderValue::from_str(&content_type) {
                    response.headers_mut().insert(header::CONTENT_TYPE, value);
                }
                response
            }
            Payload::Empty => self.status.into_response(),
        };

        for (name, value) in self.cors.iter() {
            response.headers_mut().insert(name.clone(), value.clone());
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    use crate::relay::{CorsPolicy, RelayResponse};

    #[test]
    fn rendered_responses_carry_the_cors_headers() {
        let policy = CorsPolicy::default();
        let response = RelayResponse::upstream_failure(&Method::POST, &policy).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }

    #[test]
    fn preflight_renders_as_an_empty_ok() {
        let policy = CorsPolicy::default();
        let response = RelayResponse::preflight(&policy).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-methods"],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
    }
}
