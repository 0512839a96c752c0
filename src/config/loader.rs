//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding the listening port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RelayConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Read the `PORT` environment variable, falling back to `default_port`.
///
/// Unparsable values fall back as well; the relay's only environment knob is
/// the listening port, so a bad value must not prevent startup.
pub fn port_from_env(default_port: u16) -> u16 {
    std::env::var(PORT_ENV)
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(default_port)
}

/// Apply the `PORT` environment override to the configured bind address.
///
/// Bind addresses that do not parse are left alone; validation rejects them
/// with a proper error before anything binds.
pub fn apply_port_override(config: &mut RelayConfig) {
    if let Ok(addr) = config.listener.bind_address.parse::<std::net::SocketAddr>() {
        let port = port_from_env(addr.port());
        config.listener.bind_address = with_port(&config.listener.bind_address, port);
    }
}

/// Replace the port of a `host:port` bind address, keeping the host part.
///
/// Addresses that do not parse are returned unchanged; validation has its
/// own, louder opinion about those.
pub fn with_port(bind_address: &str, port: u16) -> String {
    match bind_address.parse::<std::net::SocketAddr>() {
        Ok(mut addr) => {
            addr.set_port(port);
            addr.to_string()
        }
        Err(_) => bind_address.to_string(),
    }
}
