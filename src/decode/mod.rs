//! Response decoding.
//!
//! # Data Flow
//! ```text
//! raw body (newlines already stripped)
//!     → sentinel check ("0"/"false" → NoData, "1"/"true"/"-1" → True)
//!     → JSON parse → TableData.Row
//!     → single-row vs multi-row normalization
//!     → RecordSet (or NoData when empty)
//! ```
//!
//! # Design Decisions
//! - The remote service serializes one row as a bare object and several rows
//!   as an array of objects; both become an ordered `RecordSet`
//! - The lenient decoder never fails: unparseable bodies are `NoData`
//! - `decode_response_strict` reports unparseable bodies as errors for
//!   deployments that must tell "empty" from "broken"

pub mod envelope;
pub mod record;

pub use envelope::{decode_response, decode_response_strict, Decoded, DecodeError};
pub use record::{Record, RecordSet};
