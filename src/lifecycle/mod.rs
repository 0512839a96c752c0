//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM / ctrl-c → shutdown_signal() resolves
//!
//! Shutdown (shutdown.rs):
//!     Shutdown::trigger() → broadcast → axum drains in-flight requests → exit
//! ```
//!
//! # Design Decisions
//! - One broadcast channel shared by every listening surface
//! - Tests drive the same trigger path as the OS signals

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::shutdown_signal;
