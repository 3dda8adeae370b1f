//! CORS relay library.
//!
//! Forwards browser requests to a single backend origin and relays the
//! answers with `Access-Control-Allow-Origin: *`, answering preflight
//! checks locally.

pub mod config;
pub mod forwarder;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod security;

pub use config::RelayConfig;
pub use forwarder::Forwarder;
pub use http::RelayServer;
pub use lifecycle::Shutdown;
