//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Offer the optional hook that prints relayed response bodies
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level
//! - The response print is an observer, never part of the relay contract

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::http::request::InboundRequest;
use crate::http::response::OutboundResponse;

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(level: &str) -> String {
    format!("cors_relay={level},tower_http={level}")
}

/// Install the global tracing subscriber.
pub fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Sees every response the relay obtained from the backend, before it is
/// written to the caller. Must not block.
pub trait RelayObserver: Send + Sync {
    fn on_relayed(&self, request: &InboundRequest, response: &OutboundResponse);
}

/// Logs relayed bodies at info level (`observability.show_responses`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseLogger;

impl RelayObserver for ResponseLogger {
    fn on_relayed(&self, request: &InboundRequest, response: &OutboundResponse) {
        tracing::info!(
            target: "cors_relay::responses",
            method = %request.method,
            path = %request.path,
            status = response.status.as_u16(),
            body = %String::from_utf8_lossy(&response.body),
            "Backend response"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_covers_crate_and_tower_http() {
        assert_eq!(default_directive("debug"), "cors_relay=debug,tower_http=debug");
        assert!(EnvFilter::try_new(default_directive("info")).is_ok());
    }
}
