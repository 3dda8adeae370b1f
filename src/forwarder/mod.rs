//! Request-forwarding core.
//!
//! # Data Flow
//! ```text
//! InboundRequest
//!     → exchange.rs (classify: Preflight | Relay(method) | Unsupported)
//!     → preflight.rs (synthesize 204 locally)
//!       or relay.rs (filter headers → backend round trip → filter headers)
//!     → OutboundResponse (always carries Access-Control-Allow-Origin: *)
//! ```
//!
//! # Design Decisions
//! - The Forwarder holds only read-only configuration and a pooled client,
//!   so one instance is shared by every connection
//! - Backend failures never escape as errors; they become 500 responses
//! - One attempt per request, no retries

pub mod error;
pub mod exchange;
pub mod preflight;
pub mod relay;

use axum::body::Body;
use axum::http::StatusCode;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::{BackendConfig, RelayConfig};
use crate::http::request::InboundRequest;
use crate::http::response::OutboundResponse;
use crate::observability::logging::{RelayObserver, ResponseLogger};
use crate::observability::metrics;

pub use error::ForwardError;
pub use exchange::{Exchange, RelayMethod};
pub use preflight::handle_preflight;

/// Relays caller requests to one fixed backend origin.
pub struct Forwarder {
    origin: String,
    timeout: Duration,
    client: Client<HttpConnector, Body>,
    observer: Option<Arc<dyn RelayObserver>>,
}

impl Forwarder {
    /// Create a forwarder for the given backend, without an observer.
    pub fn new(backend: &BackendConfig) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(backend.timeout()));

        let client = Client::builder(TokioExecutor::new()).build(connector);

        Self {
            origin: backend.origin.clone(),
            timeout: backend.timeout(),
            client,
            observer: None,
        }
    }

    /// Create a forwarder from the full configuration, installing the
    /// response logger when `observability.show_responses` is set.
    pub fn from_config(config: &RelayConfig) -> Self {
        let forwarder = Self::new(&config.backend);
        if config.observability.show_responses {
            forwarder.with_observer(Arc::new(ResponseLogger))
        } else {
            forwarder
        }
    }

    /// Install a hook that sees every successfully relayed response.
    pub fn with_observer(mut self, observer: Arc<dyn RelayObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Produce the one response owed for `request`.
    pub async fn handle(&self, request: InboundRequest) -> OutboundResponse {
        let start = Instant::now();
        let exchange = Exchange::classify(&request.method);
        let method = request.method.clone();

        let response = match exchange {
            Exchange::Preflight => {
                tracing::debug!(path = %request.path, "Answering preflight locally");
                handle_preflight(&request.headers)
            }
            Exchange::Relay(method) => self.forward_request(method, request).await,
            Exchange::Unsupported => {
                tracing::warn!(method = %method, path = %request.path, "Unsupported method");
                OutboundResponse::error(
                    StatusCode::NOT_IMPLEMENTED,
                    &format!("Unsupported method ('{}')", method),
                )
            }
        };

        metrics::record_exchange(exchange.kind(), method.as_str(), response.status.as_u16(), start);
        response
    }
}

impl std::fmt::Debug for Forwarder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Forwarder")
            .field("origin", &self.origin)
            .field("timeout", &self.timeout)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
