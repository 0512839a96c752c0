//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! request handling produces:
//!     → logging.rs (structured log events, request-id correlated)
//!     → metrics.rs (counters and latency histograms)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Prometheus scrape endpoint (optional, installed by the binaries)
//! ```
//!
//! # Design Decisions
//! - The request ID flows through every log line via the tracing layer
//! - Metric updates are cheap atomic operations recorded from handlers
//! - The library only records; exporters are a binary concern

pub mod logging;
pub mod metrics;
