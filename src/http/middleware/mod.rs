//! Tower/axum middleware specific to the relay's hosting surfaces.

pub mod request_log;
