//! Reacto gateway library
//!
//! Lets code written against the old Reacto SOAP service keep calling the
//! same operations while the transport underneath is JSON over HTTP.

pub mod args;
pub mod catalog;
pub mod client;
pub mod config;
pub mod decode;
pub mod errors;
pub mod http;
pub mod observability;
pub mod service;

pub use catalog::{CallSpec, Catalog};
pub use client::ReactoClient;
pub use config::GatewayConfig;
pub use decode::{Decoded, RecordSet};
pub use errors::{ErrorStore, MemoryErrorStore};
pub use http::GatewayServer;
pub use service::{ReactoApiService, ServiceError};
