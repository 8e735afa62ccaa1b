//! Argument handling for outbound calls.
//!
//! # Data Flow
//! ```text
//! caller's positional values (serde_json::Value)
//!     → coerce.rs (cast each value to its declared ParamKind, drop extras)
//!     → named.rs  (preset every declared name to Omitted, overlay coerced values)
//!     → Payload   (JSON object, JSON array, or no body at all)
//! ```
//!
//! # Design Decisions
//! - Extra positional values beyond the declared list are silently dropped
//! - Missing trailing values stay `ArgValue::Omitted`, which serializes as the
//!   `~~NULL~~` literal the remote side expects; they are never sent as `null`
//! - Casts follow the loose rules legacy callers were written against
//!   (`"12abc"` is 12, `null` is 0 for an integer slot)

pub mod coerce;
pub mod named;

pub use coerce::coerce_arguments;
pub use named::{ArgValue, NamedArguments, Payload, OMITTED_SENTINEL};
