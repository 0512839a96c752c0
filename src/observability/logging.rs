//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Honor `RUST_LOG` over the configured level
//!
//! # Design Decisions
//! - fmt layer to stdout; aggregation happens outside the process
//! - The configured level only seeds the default filter; `RUST_LOG` wins

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global subscriber with `log_level` as the crate default.
///
/// Safe to call more than once; later calls are no-ops so tests can share a
/// process.
pub fn init_logging(log_level: &str) {
    let default_filter = format!("cors_relay={log_level},tower_http=info");
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
