//! Relay core subsystem.
//!
//! # Data Flow
//! ```text
//! RelayRequest (method, path segments, query, auth, body)
//!     → policy.rs (OPTIONS answered with a bare CORS response, no upstream)
//!     → resolver.rs (segments + query → absolute upstream URL)
//!     → forwarder.rs (single outbound call, auth forwarded, JSON body policy)
//!     → translator.rs (content-type classification, JSON or verbatim text)
//!     → RelayResponse (status preserved, CORS headers attached)
//! ```
//!
//! # Design Decisions
//! - One core, many entrypoints: hosting adapters only convert between their
//!   transport types and [`RelayRequest`]/[`RelayResponse`]
//! - Stateless per request: no caching, no retries, at most one upstream call
//! - Transport failures never escape as errors; every failure mode has a
//!   response shape

pub mod error;
pub mod forwarder;
pub mod policy;
pub mod request;
pub mod resolver;
pub mod translator;

pub use error::RelayError;
pub use forwarder::Forwarder;
pub use policy::CorsPolicy;
pub use request::RelayRequest;
pub use resolver::{UpstreamResolver, UpstreamTarget};
pub use translator::{translate, Payload, RelayResponse, ResponseKind};

use axum::http::Method;

use crate::config::RelayConfig;

/// The unified relay pipeline shared by every hosting entrypoint.
#[derive(Clone)]
pub struct RelayCore {
    resolver: UpstreamResolver,
    forwarder: Forwarder,
    policy: CorsPolicy,
}

impl RelayCore {
    pub fn from_config(config: &RelayConfig) -> Self {
        Self {
            resolver: UpstreamResolver::new(
                &config.upstream.origin,
                &config.upstream.api_base,
                config.upstream.allow_absolute_targets,
            ),
            forwarder: Forwarder::new(),
            policy: CorsPolicy::from_config(&config.cors),
        }
    }

    /// The CORS policy, for adapters that synthesize their own responses.
    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    /// Handle one inbound request end to end.
    ///
    /// Infallible by contract: preflights short-circuit, upstream responses
    /// pass through, and transport failures collapse into a generic 500 with
    /// a verb-specific message.
    pub async fn handle(&self, request: RelayRequest) -> RelayResponse {
        if request.method == Method::OPTIONS {
            return RelayResponse::preflight(&self.policy);
        }

        let target = self.resolver.resolve(&request.path, request.query.as_deref());
        tracing::debug!(method = %request.method, target = %target, "Relaying request");

        let upstream = match self.forwarder.forward(&target, &request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(
                    method = %request.method,
                    target = %target,
                    error = %error,
                    "Upstream call failed"
                );
                return RelayResponse::upstream_failure(&request.method, &self.policy);
            }
        };

        match translate(upstream, &self.policy).await {
            Ok(response) => {
                if let Payload::Text { body, content_type } = &response.payload {
                    tracing::debug!(
                        target = %target,
                        status = %response.status,
                        content_type = %content_type,
                        bytes = body.len(),
                        "Non-JSON upstream payload passed through verbatim"
                    );
                }
                response
            }
            Err(error) => {
                tracing::error!(
                    method = %request.method,
                    target = %target,
                    error = %error,
                    "Upstream body transfer failed"
                );
                RelayResponse::upstream_failure(&request.method, &self.policy)
            }
        }
    }
}
