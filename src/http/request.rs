//! Inbound request descriptor.
//!
//! # Responsibilities
//! - Capture method, opaque target path, headers and body of a caller request
//! - Decide from the declared `Content-Length` whether a body exists
//! - Buffer exactly the declared number of bytes
//!
//! # Design Decisions
//! - A missing or zero `Content-Length` means "no body"; so does a
//!   malformed one that reaches the relay (the HTTP/1 listener already
//!   refuses those with a bare 400)
//! - Declarations above the configured limit are refused before reading
//! - Chunked uploads without a length are not read

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, Method, Request};
use thiserror::Error;

/// Reasons an inbound body could not be captured.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("declared body of {declared} bytes exceeds the {limit} byte limit")]
    TooLarge { declared: usize, limit: usize },

    #[error("failed to read request body: {0}")]
    Read(#[from] axum::Error),
}

/// A caller request as seen by the relay core.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    /// Path plus query string, exactly as the caller sent it.
    pub path: String,
    pub headers: HeaderMap,
    /// Present only when a positive `Content-Length` was declared.
    pub body: Option<Bytes>,
}

impl InboundRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Capture an axum request, buffering at most `max_body_bytes`.
    pub async fn from_http(request: Request<Body>, max_body_bytes: usize) -> Result<Self, BodyError> {
        let (parts, body) = request.into_parts();

        let path = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| "/".to_string());

        let body = match declared_content_length(&parts.headers) {
            Some(declared) if declared > max_body_bytes => {
                return Err(BodyError::TooLarge {
                    declared,
                    limit: max_body_bytes,
                });
            }
            Some(declared) => Some(axum::body::to_bytes(body, declared).await?),
            None => None,
        };

        Ok(Self {
            method: parts.method,
            path,
            headers: parts.headers,
            body,
        })
    }
}

/// The positive `Content-Length` a caller declared, if any.
///
/// Repeated headers use the last value.
pub fn declared_content_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get_all(header::CONTENT_LENGTH)
        .iter()
        .last()
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
}
