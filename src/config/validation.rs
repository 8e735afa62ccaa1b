//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, capacity >= 1)
//! - Check that addresses and the upstream URL parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream.url '{url}' is invalid: {reason}")]
    UpstreamUrl { url: String, reason: String },

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("upstream.connect_timeout_secs ({connect}) exceeds request_timeout_secs ({request})")]
    ConnectExceedsRequest { connect: u64, request: u64 },

    #[error("errors.capacity must be at least 1")]
    ZeroCapacity,

    #[error("{field} '{value}' is not a socket address")]
    Address { field: &'static str, value: String },

    #[error("session.cookie_name must not be empty")]
    EmptyCookieName,

    #[error("session.max_sessions must be at least 1")]
    ZeroSessions,
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.upstream.url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::UpstreamUrl {
            url: config.upstream.url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::UpstreamUrl {
            url: config.upstream.url.clone(),
            reason: e.to_string(),
        }),
    }

    let upstream = &config.upstream;
    if upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "upstream.connect_timeout_secs" });
    }
    if upstream.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "upstream.request_timeout_secs" });
    }
    if upstream.connect_timeout_secs > upstream.request_timeout_secs {
        errors.push(ValidationError::ConnectExceedsRequest {
            connect: upstream.connect_timeout_secs,
            request: upstream.request_timeout_secs,
        });
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "listener.request_timeout_secs" });
    }

    if config.errors.capacity == 0 {
        errors.push(ValidationError::ZeroCapacity);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::Address {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::Address {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.session.cookie_name.trim().is_empty() {
        errors.push(ValidationError::EmptyCookieName);
    }
    if config.session.max_sessions == 0 {
        errors.push(ValidationError::ZeroSessions);
    }
    if config.session.idle_ttl_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "session.idle_ttl_secs" });
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
        assert_eq!(validate_config(&GatewayConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = GatewayConfig::default();
        config.upstream.url = "ftp://erp".to_string();
        config.upstream.connect_timeout_secs = 0;
        config.errors.capacity = 0;
        config.listener.bind_address = "nowhere".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroCapacity));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::UpstreamUrl { reason, .. } if reason.contains("ftp"))));
    }

    #[test]
    fn test_session_limits() {
        let mut config = GatewayConfig::default();
        config.session.max_sessions = 0;
        config.session.idle_ttl_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroSessions,
                ValidationError::ZeroTimeout { field: "session.idle_ttl_secs" },
            ]
        );
    }

    #[test]
    fn test_connect_longer_than_request() {
        let mut config = GatewayConfig::default();
        config.upstream.connect_timeout_secs = 40;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::ConnectExceedsRequest { connect: 40, request: 30 }]
        );
    }
}
