//! Backend round trip.

use axum::body::{Body, Bytes};
use axum::http::{response::Parts, Request, Response, StatusCode, Uri};
use hyper::body::Incoming;

use super::{ForwardError, Forwarder, RelayMethod};
use crate::http::request::InboundRequest;
use crate::http::response::OutboundResponse;
use crate::observability::metrics;
use crate::resilience::with_timeout;
use crate::security::headers::{allow_any_origin, filter_request_headers, filter_response_headers};

impl Forwarder {
    /// Reproduce `request` against the backend and relay its answer.
    ///
    /// Any failure becomes a 500 with a JSON error body; the caller always
    /// gets a complete response.
    pub async fn forward_request(&self, method: RelayMethod, request: InboundRequest) -> OutboundResponse {
        match self.round_trip(method, &request).await {
            Ok(response) => {
                tracing::debug!(
                    method = %method,
                    path = %request.path,
                    status = %response.status,
                    bytes = response.body.len(),
                    "Relayed backend response"
                );
                if let Some(observer) = &self.observer {
                    observer.on_relayed(&request, &response);
                }
                response
            }
            Err(e) => {
                tracing::error!(method = %method, path = %request.path, error = %e, "Upstream error");
                metrics::record_upstream_error(method.as_str());
                OutboundResponse::error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
            }
        }
    }

    /// Backend origin with the caller's path appended verbatim.
    pub fn target_url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    async fn round_trip(
        &self,
        method: RelayMethod,
        request: &InboundRequest,
    ) -> Result<OutboundResponse, ForwardError> {
        let target = self.target_url(&request.path);
        let uri: Uri = target
            .parse()
            .map_err(|source| ForwardError::InvalidTarget {
                target: target.clone(),
                source,
            })?;

        let mut builder = Request::builder().method(method.as_method()).uri(uri);
        if let Some(headers) = builder.headers_mut() {
            *headers = filter_request_headers(&request.headers);
        }

        let body = match &request.body {
            Some(bytes) => Body::from(bytes.clone()),
            None => Body::empty(),
        };
        let outbound = builder.body(body)?;

        let (parts, body) = with_timeout(self.timeout, self.exchange(outbound)).await??;

        let mut headers = filter_response_headers(&parts.headers);
        allow_any_origin(&mut headers);

        Ok(OutboundResponse::new(parts.status, headers, body))
    }

    async fn exchange(&self, outbound: Request<Body>) -> Result<(Parts, Bytes), ForwardError> {
        let response: Response<Incoming> = self.client.request(outbound).await?;
        let (parts, body) = response.into_parts();
        let bytes = axum::body::to_bytes(Body::new(body), usize::MAX).await?;
        Ok((parts, bytes))
    }
}
