//! HTTP dispatch of logical calls.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::fmt;
use std::panic::Location;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::args::Payload;
use crate::config::UpstreamConfig;

/// Header carrying the logical call name.
pub const METHOD_OVERRIDE: &str = "X-HTTP-Method-Override";

/// Timeouts applied to every outbound call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientTimeouts {
    /// Connection establishment. Default: 5 seconds
    pub connect: Duration,
    /// Whole request/response. Default: 30 seconds
    pub request: Duration,
}

impl Default for ClientTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            request: Duration::from_secs(30),
        }
    }
}

impl From<&UpstreamConfig> for ClientTimeouts {
    fn from(config: &UpstreamConfig) -> Self {
        Self {
            connect: Duration::from_secs(config.connect_timeout_secs),
            request: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

/// What went wrong talking to the endpoint.
#[derive(Debug, Error)]
pub enum TransportErrorKind {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("upstream returned an error status: {0}")]
    Status(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// A failed call, with the source location that raised it.
#[derive(Debug)]
pub struct TransportError {
    kind: TransportErrorKind,
    location: &'static Location<'static>,
}

impl TransportError {
    #[track_caller]
    fn new(kind: TransportErrorKind) -> Self {
        Self {
            kind,
            location: Location::caller(),
        }
    }

    pub fn kind(&self) -> &TransportErrorKind {
        &self.kind
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn is_timeout(&self) -> bool {
        self.reqwest_error().is_some_and(reqwest::Error::is_timeout)
    }

    /// HTTP status for non-2xx answers.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        self.reqwest_error().and_then(reqwest::Error::status)
    }

    fn reqwest_error(&self) -> Option<&reqwest::Error> {
        match &self.kind {
            TransportErrorKind::Build(e)
            | TransportErrorKind::Request(e)
            | TransportErrorKind::Status(e)
            | TransportErrorKind::Body(e) => Some(e),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

/// Client for the single Reacto endpoint.
#[derive(Clone)]
pub struct ReactoClient {
    http: Client,
    url: String,
    timeouts: ClientTimeouts,
}

impl ReactoClient {
    /// Client with the default 30s request / 5s connect timeouts.
    pub fn new(url: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_timeouts(url, ClientTimeouts::default())
    }

    pub fn with_timeouts(url: impl Into<String>, timeouts: ClientTimeouts) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(timeouts.request)
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(|e| TransportError::new(TransportErrorKind::Build(e)))?;
        Ok(Self {
            http,
            url: url.into(),
            timeouts,
        })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, TransportError> {
        Self::with_timeouts(config.url.clone(), ClientTimeouts::from(config))
    }

    /// Endpoint every call is sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeouts(&self) -> ClientTimeouts {
        self.timeouts
    }

    /// POST `payload` as the logical call `call` and return the raw body.
    ///
    /// An empty payload is sent without a body.
    pub async fn dispatch(&self, call: &str, payload: &Payload) -> Result<String, TransportError> {
        let start_time = Instant::now();

        let mut request = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(METHOD_OVERRIDE, call);
        if !payload.is_empty() {
            request = request.json(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::new(TransportErrorKind::Request(e)))?;
        let status = response.status();
        let response = response
            .error_for_status()
            .map_err(|e| TransportError::new(TransportErrorKind::Status(e)))?;
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(TransportErrorKind::Body(e)))?;

        tracing::debug!(
            call = %call,
            status = %status,
            bytes = body.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Upstream call completed"
        );

        Ok(strip_line_breaks(&body))
    }
}

impl fmt::Debug for ReactoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactoClient")
            .field("url", &self.url)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

/// Remove `\n` and `\r\n`; a lone `\r` is kept.
fn strip_line_breaks(body: &str) -> String {
    body.replace("\r\n", "").replace('\n', "")
}
