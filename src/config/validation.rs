//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0, port valid)
//! - Check header names and values are legal HTTP
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::{HeaderName, HeaderValue};

use crate::config::schema::ServerConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::new("listener.host", "must not be empty"));
    }

    if config.static_files.enabled && config.static_files.root.trim().is_empty() {
        errors.push(ValidationError::new(
            "static_files.root",
            "must be set when static files are enabled",
        ));
    }

    if config.render.timeout_ms == 0 {
        errors.push(ValidationError::new("render.timeout_ms", "must be greater than zero"));
    }

    if let Some(path) = &config.render.template_path {
        if path.trim().is_empty() {
            errors.push(ValidationError::new("render.template_path", "must not be empty"));
        }
    }

    for (name, value) in &config.security.headers {
        if HeaderName::try_from(name.as_str()).is_err() {
            errors.push(ValidationError::new(
                format!("security.headers.{}", name),
                "invalid header name",
            ));
        }
        if HeaderValue::try_from(value.as_str()).is_err() {
            errors.push(ValidationError::new(
                format!("security.headers.{}", name),
                "invalid header value",
            ));
        }
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            "must be a socket address",
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
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = ServerConfig::default();
        config.render.timeout_ms = 0;
        config.static_files.root = String::new();
        config
            .security
            .headers
            .insert("bad header".to_string(), "x".to_string());

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(errors.len(), 3);
        assert!(fields.contains(&"render.timeout_ms"));
        assert!(fields.contains(&"static_files.root"));
        assert!(fields.contains(&"security.headers.bad header"));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ServerConfig::default();
        config.observability.metrics_address = "nowhere".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
