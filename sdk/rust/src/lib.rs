//! Typed client for the relay.
//!
//! Wraps the relay's HTTP surface the way the calling UI layer consumes it:
//! bearer tokens injected from a [`TokenStore`] capability, non-2xx statuses
//! translated into typed errors, and tolerant decoding of the upstream's
//! unstable listing shapes.

pub mod client;
pub mod decode;

pub use client::{ApiClient, ApiError, MemoryTokenStore, TokenStore};
pub use decode::{Listing, ListingError};
