//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address, body cap).
    pub listener: ListenerConfig,

    /// Upstream origin the relay forwards to.
    pub upstream: UpstreamConfig,

    /// CORS response header extras.
    pub cors: CorsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Maximum buffered request/response body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Upstream origin configuration.
///
/// The relay targets exactly one backend: `origin` + `api_base` is the
/// fully qualified base every relative inbound path is resolved against.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Origin of the backend API (scheme://host[:port], no trailing slash).
    pub origin: String,

    /// Path prefix the backend serves its API under.
    pub api_base: String,

    /// Pass inbound paths that are already absolute URLs through unchanged.
    ///
    /// Off by default: an attacker-controlled path segment must not be able
    /// to redirect the relay to an arbitrary origin.
    pub allow_absolute_targets: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            origin: "http://127.0.0.1:5000".to_string(),
            api_base: "/api".to_string(),
            allow_absolute_targets: false,
        }
    }
}

/// CORS response header extras.
///
/// The core header set (origin, methods, headers) is fixed; these knobs
/// cover the per-entrypoint additions.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// `Access-Control-Max-Age` value in seconds; omitted when absent.
    pub max_age_secs: Option<u64>,

    /// Emit `Access-Control-Allow-Credentials: true` (dev proxy surface).
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            max_age_secs: Some(86_400),
            allow_credentials: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_local_backend() {
        let config = RelayConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.upstream.origin, "http://127.0.0.1:5000");
        assert_eq!(config.upstream.api_base, "/api");
        assert!(!config.upstream.allow_absolute_targets);
        assert_eq!(config.cors.max_age_secs, Some(86_400));
        assert!(!config.cors.allow_credentials);
    }

    #[test]
    fn minimal_toml_fills_defaults() {
        let config: RelayConfig = toml::from_str(
            r#"
            [upstream]
            origin = "http://10.0.0.7:5000"
            "#,
        )
        .unwrap();
        assert_eq!(config.upstream.origin, "http://10.0.0.7:5000");
        assert_eq!(config.upstream.api_base, "/api");
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
    }
}
