//! Classification of inbound methods.

use axum::http::Method;

/// A method the relay forwards to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RelayMethod {
    pub fn as_method(self) -> Method {
        match self {
            RelayMethod::Get => Method::GET,
            RelayMethod::Post => Method::POST,
            RelayMethod::Put => Method::PUT,
            RelayMethod::Delete => Method::DELETE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RelayMethod::Get => "GET",
            RelayMethod::Post => "POST",
            RelayMethod::Put => "PUT",
            RelayMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for RelayMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the relay does with one inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    /// Answered locally; the backend is never contacted.
    Preflight,
    /// Reproduced against the backend with the same method.
    Relay(RelayMethod),
    /// Answered locally with 501 Not Implemented.
    Unsupported,
}

impl Exchange {
    pub fn classify(method: &Method) -> Self {
        match *method {
            Method::OPTIONS => Exchange::Preflight,
            Method::GET => Exchange::Relay(RelayMethod::Get),
            Method::POST => Exchange::Relay(RelayMethod::Post),
            Method::PUT => Exchange::Relay(RelayMethod::Put),
            Method::DELETE => Exchange::Relay(RelayMethod::Delete),
            _ => Exchange::Unsupported,
        }
    }

    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Exchange::Preflight => "preflight",
            Exchange::Relay(_) => "relay",
            Exchange::Unsupported => "unsupported",
        }
    }
}
