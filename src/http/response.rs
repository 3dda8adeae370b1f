//! Outbound response descriptor.
//!
//! # Responsibilities
//! - Hold the status, headers and fully buffered body written to the caller
//! - Render relay-generated error responses in the JSON wire format
//! - Convert into an axum response without touching headers
//!
//! # Design Decisions
//! - Bodies are buffered; the relay never streams
//! - Duplicate headers survive conversion (append, not insert)

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::security::headers::allow_any_origin;

/// A response ready to be written to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl OutboundResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// A relay-generated failure: `{"error": message}` with the CORS origin.
    pub fn error(status: StatusCode, message: &str) -> Self {
        let body = format!("{{\"error\": {}}}", error_string(message));

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        allow_any_origin(&mut headers);

        Self::new(status, headers, body)
    }
}

/// `message` as a JSON string literal.
fn error_string(message: &str) -> String {
    serde_json::to_string(message).unwrap_or_else(|_| "\"internal error\"".to_string())
}

impl IntoResponse for OutboundResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
