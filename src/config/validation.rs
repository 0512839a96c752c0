//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and the upstream origin URL
//! - Validate value ranges (body cap > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug)]
pub enum ValidationError {
    /// The listener bind address does not parse as host:port.
    BadBindAddress(String),
    /// The upstream origin is not an absolute http(s) URL.
    BadUpstreamOrigin(String),
    /// The api base must start with '/' and must not end with one.
    BadApiBase(String),
    /// The buffered body cap must be non-zero.
    ZeroBodyCap,
    /// The metrics address does not parse while metrics are enabled.
    BadMetricsAddress(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::BadBindAddress(addr) => {
                write!(f, "listener.bind_address {:?} is not a valid socket address", addr)
            }
            ValidationError::BadUpstreamOrigin(origin) => {
                write!(f, "upstream.origin {:?} is not an absolute http(s) URL", origin)
            }
            ValidationError::BadApiBase(base) => {
                write!(f, "upstream.api_base {:?} must start with '/' and not end with one", base)
            }
            ValidationError::ZeroBodyCap => {
                write!(f, "listener.max_body_bytes must be greater than zero")
            }
            ValidationError::BadMetricsAddress(addr) => {
                write!(f, "observability.metrics_address {:?} is not a valid socket address", addr)
            }
        }
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BadBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.listener.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyCap);
    }

    match Url::parse(&config.upstream.origin) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => {}
        _ => errors.push(ValidationError::BadUpstreamOrigin(
            config.upstream.origin.clone(),
        )),
    }

    let base = &config.upstream.api_base;
    if !base.starts_with('/') || (base.len() > 1 && base.ends_with('/')) {
        errors.push(ValidationError::BadApiBase(base.clone()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::BadMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RelayConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.listener.max_body_bytes = 0;
        config.upstream.origin = "ftp://files.example.com".into();
        config.upstream.api_base = "api/".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn rejects_relative_origin() {
        let mut config = RelayConfig::default();
        config.upstream.origin = "139.28.37.39:5000".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn root_api_base_is_allowed() {
        let mut config = RelayConfig::default();
        config.upstream.api_base = "/".into();
        assert!(validate_config(&config).is_ok());
    }
}
