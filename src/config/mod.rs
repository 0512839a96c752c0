//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, PORT env override)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared with the relay core and entrypoints at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the relay is stateless per request and
//!   has no reload path
//! - All fields have defaults to allow minimal configs (or none at all)
//! - Validation separates syntactic (serde) from semantic checks
//! - The only environment knob is the listening port (`PORT`)

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::CorsConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::RelayConfig;
pub use schema::UpstreamConfig;
