//! Per-exchange spans.
//!
//! # Responsibilities
//! - Give each inbound request a span carrying a fresh request ID
//!
//! # Design Decisions
//! - The ID lives only in the span; it is never written into forwarded or
//!   relayed headers, so the wire traffic is exactly what the caller and
//!   backend exchanged

use axum::http::Request;
use tower_http::trace::MakeSpan;
use tracing::Span;
use uuid::Uuid;

/// `MakeSpan` for `TraceLayer` that tags every request with a UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = Uuid::new_v4();
        tracing::info_span!(
            "exchange",
            request_id = %request_id,
            method = %request.method(),
            uri = %request.uri(),
        )
    }
}
