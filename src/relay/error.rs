//! Relay error taxonomy.
//!
//! Only transport-level failures between the relay and the upstream live
//! here. Upstream responses with error statuses are not errors to the relay;
//! they pass through untouched.

use axum::http::Method;
use thiserror::Error;

/// A failure that prevented the relay from completing the upstream exchange.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The resolved target could not be assembled into an outbound request.
    #[error("invalid upstream target {url:?}: {source}")]
    BadTarget {
        url: String,
        #[source]
        source: axum::http::Error,
    },

    /// The upstream could not be reached or the exchange failed mid-flight.
    #[error("upstream unreachable: {0}")]
    Unreachable(#[from] hyper_util::client::legacy::Error),

    /// The upstream response body could not be read to completion.
    #[error("upstream body transfer failed: {0}")]
    BodyTransfer(#[from] hyper::Error),
}

/// Caller-facing phrasing for a synthesized relay failure, keyed by verb.
///
/// Clients display these strings directly, so the wording is part of the
/// relay's contract and stays stable across failure causes.
pub fn failure_message(method: &Method) -> &'static str {
    match *method {
        Method::GET => "Failed to fetch data from API",
        Method::POST => "Failed to send data to API",
        Method::PUT => "Failed to update data on API",
        Method::DELETE => "Failed to delete data on API",
        _ => "Failed to reach API",
    }
}
