//! Local answers to browser preflight checks.

use axum::body::Bytes;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};

use crate::http::response::OutboundResponse;
use crate::security::headers::allow_any_origin;

/// Methods advertised to every preflight, independent of the backend.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Allowed headers when the browser did not name any.
pub const DEFAULT_ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// How long a browser may cache the preflight answer.
pub const MAX_AGE_SECS: &str = "86400";

/// Synthesize the 204 answer to an `OPTIONS` request.
///
/// Only `Access-Control-Request-Headers` is consulted; it is echoed back as
/// the allowed header list.
pub fn handle_preflight(inbound: &HeaderMap) -> OutboundResponse {
    let allow_headers = inbound
        .get_all(header::ACCESS_CONTROL_REQUEST_HEADERS)
        .iter()
        .last()
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ALLOWED_HEADERS));

    let mut headers = HeaderMap::with_capacity(4);
    allow_any_origin(&mut headers);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, allow_headers);
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(MAX_AGE_SECS),
    );

    OutboundResponse::new(StatusCode::NO_CONTENT, headers, Bytes::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_requested_headers() {
        let mut inbound = HeaderMap::new();
        inbound.insert(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("X-Custom"),
        );

        let response = handle_preflight(&inbound);
        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert!(response.body.is_empty());
        assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "X-Custom");
        assert_eq!(
            response.headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(response.headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
        assert_eq!(response.headers.len(), 4);
    }

    #[test]
    fn falls_back_to_default_headers() {
        let response = handle_preflight(&HeaderMap::new());
        assert_eq!(
            response.headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type, Authorization"
        );
    }

    #[test]
    fn ignores_unrelated_headers() {
        let mut inbound = HeaderMap::new();
        inbound.insert(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("PATCH"),
        );
        inbound.insert(header::ORIGIN, HeaderValue::from_static("https://app.example"));

        let response = handle_preflight(&inbound);
        assert_eq!(
            response.headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            ALLOWED_METHODS
        );
        assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
