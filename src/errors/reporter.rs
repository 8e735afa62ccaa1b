//! Capture of transport failures.

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use std::path::PathBuf;

use super::page::render_failure_page;
use super::record::{trace_of, ErrorId, ErrorRecord};
use super::store::ErrorStore;
use crate::args::Payload;
use crate::client::TransportError;
use crate::config::ErrorsConfig;
use crate::observability::metrics;

/// Response header carrying the id of a captured failure.
pub const ERROR_ID_HEADER: &str = "x-reacto-error-id";

/// Outcome of a captured failure: what the end user gets to see.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedFailure {
    pub error_id: ErrorId,
    pub page: String,
}

impl IntoResponse for CapturedFailure {
    fn into_response(self) -> Response {
        let mut response = (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=UTF-8")],
            self.page,
        )
            .into_response();
        if let Ok(value) = HeaderValue::from_str(self.error_id.as_str()) {
            response
                .headers_mut()
                .insert(HeaderName::from_static(ERROR_ID_HEADER), value);
        }
        response
    }
}

/// Records failures and renders the user-facing page.
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    template_path: Option<PathBuf>,
    redact_fields: Vec<String>,
}

impl ErrorReporter {
    pub fn new(config: &ErrorsConfig) -> Self {
        Self {
            template_path: config.template_path.clone(),
            redact_fields: config.redact_fields.clone(),
        }
    }

    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = Some(path.into());
        self
    }

    pub fn with_redact_fields(mut self, fields: Vec<String>) -> Self {
        self.redact_fields = fields;
        self
    }

    /// Log and store a record for `error`, then render the failure page.
    pub fn capture(
        &self,
        store: &dyn ErrorStore,
        call: &str,
        payload: &Payload,
        client_url: &str,
        error: &TransportError,
    ) -> CapturedFailure {
        let location = error.location();
        let record = ErrorRecord {
            id: ErrorId::generate(),
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            function_name: call.to_string(),
            arguments: payload.redacted(&self.redact_fields),
            message: error.to_string(),
            file: location.file().to_string(),
            line: location.line(),
            trace: trace_of(error),
            client_url: client_url.to_string(),
        };

        tracing::error!(
            error_id = %record.id,
            call = %call,
            timeout = error.is_timeout(),
            "{}",
            record.log_line()
        );
        metrics::record_error_captured();

        let error_id = record.id.clone();
        store.save(record);

        CapturedFailure {
            page: render_failure_page(self.template_path.as_deref(), error_id.as_str()),
            error_id,
        }
    }
}
