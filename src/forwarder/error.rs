//! Relay failure taxonomy.

use axum::http::uri::InvalidUri;
use std::error::Error as StdError;
use thiserror::Error;

use crate::resilience::TimedOut;

/// Anything that prevents a backend round trip from completing.
///
/// Every variant is answered with the same 500 response; the variants
/// exist for logs.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Origin + path did not form a valid URL.
    #[error("invalid backend URL {target:?}: {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: InvalidUri,
    },

    #[error("failed to build backend request: {0}")]
    Request(#[from] axum::http::Error),

    /// Connect, DNS or protocol failure reported by the HTTP client.
    #[error("{}", error_chain(.0))]
    Upstream(#[from] hyper_util::client::legacy::Error),

    #[error(transparent)]
    Timeout(#[from] TimedOut),

    #[error("failed to read backend response body: {}", error_chain(.0))]
    Body(#[from] axum::Error),
}

/// Render an error and its sources as `outer: inner: root`.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
