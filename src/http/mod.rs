//! HTTP hosting layer over the relay core.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack, graceful shutdown)
//!     → request.rs (request ID assignment)
//!     → handlers.rs (bind transport parts → RelayRequest, run the core)
//!     → response.rs (RelayResponse → axum response, CORS stamped)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use handlers::{relay_router, RelayState, API_PREFIX};
pub use request::{RequestId, RequestIdExt, RequestIdLayer, X_REQUEST_ID};
pub use server::RelayServer;
