//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all route)
//!     → request.rs (capture method, path, headers, declared body)
//!     → [forwarder decides: preflight, relay, or 501]
//!     → response.rs (buffered status, headers, body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{BodyError, InboundRequest};
pub use response::OutboundResponse;
pub use server::{AppState, RelayServer};
