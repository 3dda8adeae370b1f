//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse configuration from TOML text without semantic validation.
pub fn parse_config(content: &str) -> Result<RelayConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read configuration from a TOML file without semantic validation.
///
/// Callers that layer overrides on top (the CLI) validate afterwards.
pub fn read_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse_config(
            r#"
            [backend]
            origin = "http://api.internal:7000"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.origin, "http://api.internal:7000");
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.listener.port, 8080);
    }

    #[test]
    fn full_file_parses() {
        let config = parse_config(
            r#"
            [listener]
            bind_address = "127.0.0.1"
            port = 9191

            [backend]
            origin = "http://localhost:5001"
            timeout_secs = 5

            [limits]
            max_body_bytes = 1024

            [observability]
            log_level = "debug"
            show_responses = false
            metrics_enabled = true
            metrics_address = "127.0.0.1:9900"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.socket_address(), "127.0.0.1:9191");
        assert_eq!(config.backend.timeout_secs, 5);
        assert_eq!(config.limits.max_body_bytes, 1024);
        assert!(!config.observability.show_responses);
        assert!(config.observability.metrics_enabled);
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = parse_config("[listener]\nport = \"eighty\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_rejects_invalid_file() {
        let path = std::env::temp_dir().join(format!("cors-relay-{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, "[backend]\norigin = \"not a url\"\ntimeout_secs = 0\n").unwrap();

        let err = load_config(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
