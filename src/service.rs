//! The call facade legacy code talks to.
//!
//! # Responsibilities
//! - Resolve a call name in the catalog
//! - Coerce and name the caller's positional arguments
//! - Dispatch, decode, and capture transport failures
//!
//! # Design Decisions
//! - A transport failure is terminal for the current request: it comes back
//!   as `ServiceError::Failed` carrying only the error id and the page to show
//! - The error store is passed per call, so hosts decide its scope

use serde_json::Value;
use std::time::Instant;
use thiserror::Error;

use crate::args::Payload;
use crate::catalog::{CallSpec, Catalog};
use crate::client::{ReactoClient, TransportError};
use crate::config::GatewayConfig;
use crate::decode::{decode_response, decode_response_strict, DecodeError, Decoded};
use crate::errors::{CapturedFailure, ErrorReporter, ErrorStore};
use crate::observability::metrics;

/// Why a call produced no result.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unknown call '{0}'")]
    UnknownCall(String),

    /// The upstream could not be reached; details were captured under the id.
    #[error("call failed, error id {}", .0.error_id)]
    Failed(CapturedFailure),

    /// Only raised with strict decoding enabled.
    #[error("could not decode response of '{call}': {source}")]
    Decode {
        call: String,
        #[source]
        source: DecodeError,
    },
}

/// JSON-over-HTTP replacement for the old SOAP service.
#[derive(Debug, Clone)]
pub struct ReactoApiService {
    client: ReactoClient,
    catalog: &'static Catalog,
    reporter: ErrorReporter,
    strict_decode: bool,
}

impl ReactoApiService {
    pub fn new(client: ReactoClient, reporter: ErrorReporter) -> Self {
        Self {
            client,
            catalog: Catalog::builtin(),
            reporter,
            strict_decode: false,
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self, TransportError> {
        let client = ReactoClient::from_config(&config.upstream)?;
        Ok(Self::new(client, ErrorReporter::new(&config.errors)).with_strict_decode(config.upstream.strict_decode))
    }

    pub fn with_strict_decode(mut self, strict: bool) -> Self {
        self.strict_decode = strict;
        self
    }

    pub fn with_catalog(mut self, catalog: &'static Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn client(&self) -> &ReactoClient {
        &self.client
    }

    /// Invoke the catalog call `name` with positional `args`.
    pub async fn call(
        &self,
        store: &dyn ErrorStore,
        name: &str,
        args: &[Value],
    ) -> Result<Decoded, ServiceError> {
        let spec = self
            .catalog
            .lookup(name)
            .ok_or_else(|| ServiceError::UnknownCall(name.to_string()))?;
        self.call_spec(store, spec, args).await
    }

    /// Invoke a call described by `spec`, which need not be in the catalog.
    pub async fn call_spec(
        &self,
        store: &dyn ErrorStore,
        spec: &CallSpec,
        args: &[Value],
    ) -> Result<Decoded, ServiceError> {
        let start_time = Instant::now();
        let payload = Payload::for_call(spec, args);

        let raw = match self.client.dispatch(spec.name, &payload).await {
            Ok(raw) => raw,
            Err(e) => {
                metrics::record_call(spec.name, "transport_error", start_time);
                let failure = self.reporter.capture(store, spec.name, &payload, self.client.url(), &e);
                return Err(ServiceError::Failed(failure));
            }
        };

        let decoded = if self.strict_decode {
            decode_response_strict(&raw).map_err(|source| {
                metrics::record_call(spec.name, "decode_error", start_time);
                tracing::warn!(call = %spec.name, error = %source, "Undecodable upstream response");
                ServiceError::Decode {
                    call: spec.name.to_string(),
                    source,
                }
            })?
        } else {
            decode_response(&raw)
        };

        metrics::record_call(spec.name, decoded.outcome(), start_time);
        tracing::debug!(call = %spec.name, outcome = decoded.outcome(), "Call decoded");
        Ok(decoded)
    }
}
