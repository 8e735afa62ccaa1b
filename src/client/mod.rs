//! Outbound transport to the Reacto endpoint.
//!
//! # Responsibilities
//! - Hold the configured endpoint URL and timeouts
//! - POST one call: method-override header + JSON body (or no body)
//! - Hand back the raw body with line breaks removed
//!
//! # Design Decisions
//! - One request per call, no retries, no circuit breaking
//! - Non-2xx statuses are transport failures, same as connect errors
//! - Errors remember where they were raised so captured records can show it

pub mod dispatcher;

pub use dispatcher::{ClientTimeouts, ReactoClient, TransportError, TransportErrorKind, METHOD_OVERRIDE};
