//! Header policy at the relay boundary.
//!
//! # Responsibilities
//! - Strip hop-by-hop headers before forwarding to the backend
//! - Strip transport headers from backend responses
//! - Inject the permissive CORS origin on everything the relay writes
//!
//! # Design Decisions
//! - Denylists are static sets of `HeaderName`; names are stored lowercase,
//!   so membership is case-insensitive regardless of how the peer spelled them
//! - Request headers collapse to the last value per name
//! - Response headers keep every value (e.g. several `Set-Cookie` lines)

use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};

/// Headers that never travel from the caller to the backend.
pub static REQUEST_DENYLIST: [HeaderName; 11] = [
    header::HOST,
    header::CONTENT_LENGTH,
    header::ACCEPT_ENCODING,
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    HeaderName::from_static("trailers"),
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Headers that never travel from the backend back to the caller.
pub static RESPONSE_DENYLIST: [HeaderName; 3] = [
    header::TRANSFER_ENCODING,
    header::CONNECTION,
    header::CONTENT_ENCODING,
];

/// Value injected as `Access-Control-Allow-Origin` on every relayed response.
pub const ANY_ORIGIN: &str = "*";

/// Returns true if the header must not be forwarded to the backend.
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    REQUEST_DENYLIST.contains(name)
}

/// Returns true if the backend header must not be relayed to the caller.
pub fn is_stripped_from_response(name: &HeaderName) -> bool {
    RESPONSE_DENYLIST.contains(name)
}

/// Build the header set sent to the backend.
pub fn filter_request_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut outbound = HeaderMap::with_capacity(inbound.len());
    for (name, value) in inbound.iter() {
        if is_hop_by_hop(name) {
            continue;
        }
        outbound.insert(name.clone(), value.clone());
    }
    outbound
}

/// Build the header set relayed to the caller from a backend response.
pub fn filter_response_headers(backend: &HeaderMap) -> HeaderMap {
    let mut relayed = HeaderMap::with_capacity(backend.len() + 1);
    for (name, value) in backend.iter() {
        if is_stripped_from_response(name) {
            continue;
        }
        relayed.append(name.clone(), value.clone());
    }
    relayed
}

/// Append `Access-Control-Allow-Origin: *`. Any value the backend already
/// set is kept alongside it.
pub fn allow_any_origin(headers: &mut HeaderMap) {
    headers.append(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ANY_ORIGIN),
    );
}
