//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events, incl. the REACTO_API_ERROR line)
//!     → metrics.rs (call counters, latency histogram, captured errors)
//!
//! Consumers:
//!     → stdout / log aggregation
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```
//!
//! # Design Decisions
//! - Structured fields (call, error_id, status) on every event
//! - Metric updates are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
