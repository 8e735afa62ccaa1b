//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// The remote Reacto endpoint.
    pub upstream: UpstreamConfig,

    /// Error capture settings.
    pub errors: ErrorsConfig,

    /// Session cookie settings.
    pub session: SessionConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Timeout for a whole inbound request in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 60,
        }
    }
}

/// Upstream endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// URL every call is POSTed to.
    pub url: String,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Total time for one request/response in seconds.
    pub request_timeout_secs: u64,

    /// Report unreadable responses as errors instead of empty results.
    pub strict_decode: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000/api".to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
            strict_decode: false,
        }
    }
}

/// Error capture configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ErrorsConfig {
    /// Records kept per session; the oldest is evicted first.
    pub capacity: usize,

    /// HTML template for the failure page; `{ERROR_ID}` is replaced.
    pub template_path: Option<PathBuf>,

    /// Argument names containing any of these (case-insensitive) are masked
    /// in logs and stored records.
    pub redact_fields: Vec<String>,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            capacity: 50,
            template_path: None,
            redact_fields: vec!["pass".to_string(), "token".to_string()],
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the session cookie.
    pub cookie_name: String,

    /// Sessions holding captured errors at once; the least recently used
    /// session is dropped beyond this.
    pub max_sessions: usize,

    /// Seconds without activity after which a session's errors are dropped.
    pub idle_ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "REACTO_SESSID".to_string(),
            max_sessions: 10_000,
            idle_ttl_secs: 1440,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.upstream.request_timeout_secs, 30);
        assert_eq!(config.upstream.connect_timeout_secs, 5);
        assert_eq!(config.errors.capacity, 50);
        assert!(config.errors.template_path.is_none());
        assert_eq!(config.session.max_sessions, 10_000);
        assert_eq!(config.session.idle_ttl_secs, 1440);
    }

    #[test]
    fn test_partial_toml() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [upstream]
            url = "https://erp.example.com/reacto"
            request_timeout_secs = 10

            [errors]
            template_path = "templates/error.html"
            "#,
        )
        .unwrap();
        assert_eq!(config.upstream.url, "https://erp.example.com/reacto");
        assert_eq!(config.upstream.request_timeout_secs, 10);
        assert_eq!(config.upstream.connect_timeout_secs, 5);
        assert_eq!(config.errors.capacity, 50);
        assert_eq!(config.errors.template_path, Some(PathBuf::from("templates/error.html")));
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }
}
