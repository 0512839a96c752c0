//! CORS header policy.
//!
//! # Responsibilities
//! - Compute the fixed set of CORS response headers once at startup
//! - Stamp that set onto every outgoing response, whatever its outcome
//!
//! # Design Decisions
//! - Pure data: the policy never inspects the request beyond its method
//! - Preflight and actual requests see the same header set, so a browser
//!   that passed the preflight can never fail the real call on CORS grounds
//! - Per-entrypoint extras (max-age, credentials) come from configuration

use axum::http::{header, HeaderMap, HeaderValue};

use crate::config::CorsConfig;

/// Value of `Access-Control-Allow-Origin`.
pub const ALLOW_ORIGIN: &str = "*";

/// Value of `Access-Control-Allow-Methods`.
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Value of `Access-Control-Allow-Headers`.
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// The fixed CORS header mapping attached to every relay response.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    headers: HeaderMap,
}

impl CorsPolicy {
    /// Build the policy from configuration.
    pub fn from_config(config: &CorsConfig) -> Self {
        let mut headers = HeaderMap::with_capacity(5);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
        if let Some(max_age) = config.max_age_secs {
            // Digits only, always a valid header value.
            if let Ok(value) = HeaderValue::from_str(&max_age.to_string()) {
                headers.insert(header::ACCESS_CONTROL_MAX_AGE, value);
            }
        }
        if config.allow_credentials {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            );
        }
        Self { headers }
    }

    /// The full header mapping, cloned for attachment to one response.
    pub fn headers(&self) -> HeaderMap {
        self.headers.clone()
    }

    /// Stamp the policy onto an existing header map.
    pub fn apply(&self, headers: &mut HeaderMap) {
        for (name, value) in self.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::from_config(&CorsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_trio_always_present() {
        let policy = CorsPolicy::from_config(&CorsConfig {
            max_age_secs: None,
            allow_credentials: false,
        });
        let headers = policy.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type, Authorization"
        );
        assert!(!headers.contains_key(header::ACCESS_CONTROL_MAX_AGE));
        assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_CREDENTIALS));
    }

    #[test]
    fn max_age_and_credentials_are_config_driven() {
        let policy = CorsPolicy::from_config(&CorsConfig {
            max_age_secs: Some(86_400),
            allow_credentials: true,
        });
        let headers = policy.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[test]
    fn apply_overwrites_existing_values() {
        let policy = CorsPolicy::default();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("https://stale.example"),
        );
        policy.apply(&mut headers);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
