//! cors-relay: a CORS-normalizing HTTP relay in front of one upstream API.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │                 CORS RELAY                    │
//!                         │                                               │
//!     Client Request      │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!     ────────────────────┼─▶│  http   │──▶│ resolver │──▶│ forwarder │──┼──▶ Upstream
//!                         │  │ adapter │   └──────────┘   └─────┬─────┘  │     API
//!                         │  └─────────┘                        │        │
//!     Client Response     │  ┌─────────┐   ┌────────────┐       │        │
//!     ◀───────────────────┼──│  CORS   │◀──│ translator │◀──────┘        │
//!                         │  │ policy  │   └────────────┘                │
//!                         │  └─────────┘                                 │
//!                         │                                               │
//!                         │  ┌─────────────────────────────────────────┐  │
//!                         │  │         Cross-Cutting Concerns           │  │
//!                         │  │   config   observability   lifecycle     │  │
//!                         │  └─────────────────────────────────────────┘  │
//!                         └──────────────────────────────────────────────┘
//! ```
//!
//! One [`relay::RelayCore`] serves every hosting surface: the embedded axum
//! router, the standalone relay binary and the developer CORS proxy. OPTIONS
//! preflights never leave the relay; everything else makes exactly one
//! upstream call, with the upstream's status and body passed through.

// Core subsystems
pub mod config;
pub mod http;
pub mod relay;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::RelayConfig;
pub use http::RelayServer;
pub use lifecycle::Shutdown;
pub use relay::RelayCore;
