//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the backend origin is something the relay can reach
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("backend.origin {origin:?} is not a valid URL: {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("backend.origin {0:?} must use the http scheme")]
    UnsupportedScheme(String),

    #[error("backend.origin {0:?} must not carry a query or fragment")]
    OriginHasQuery(String),

    #[error("backend.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("limits.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("listener address {0:?} is not a valid socket address")]
    InvalidListenAddress(String),

    #[error("observability.metrics_address {0:?} is not a valid socket address")]
    InvalidMetricsAddress(String),
}

/// Check a configuration for semantic problems.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let origin = &config.backend.origin;
    match Url::parse(origin) {
        Ok(url) => {
            if url.scheme() != "http" {
                errors.push(ValidationError::UnsupportedScheme(origin.clone()));
            }
            if url.query().is_some() || url.fragment().is_some() {
                errors.push(ValidationError::OriginHasQuery(origin.clone()));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidOrigin {
            origin: origin.clone(),
            reason: e.to_string(),
        }),
    }

    if config.backend.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    let listen = config.listener.socket_address();
    if listen.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidListenAddress(listen));
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&RelayConfig::default()), Ok(()));
    }

    #[test]
    fn https_origin_rejected() {
        let mut config = RelayConfig::default();
        config.backend.origin = "https://api.example.com".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnsupportedScheme("https://api.example.com".into())]
        );
    }

    #[test]
    fn origin_with_query_rejected() {
        let mut config = RelayConfig::default();
        config.backend.origin = "http://localhost:5000?x=1".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::OriginHasQuery(_)));
    }

    #[test]
    fn reports_every_problem() {
        let mut config = RelayConfig::default();
        config.backend.origin = "localhost".into();
        config.backend.timeout_secs = 0;
        config.limits.max_body_bytes = 0;
        config.listener.bind_address = "not an ip".into();
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "nowhere".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(matches!(errors[0], ValidationError::InvalidOrigin { .. }));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::ZeroBodyLimit));
    }

    #[test]
    fn metrics_address_ignored_when_disabled() {
        let mut config = RelayConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());
    }
}
