//! HTTP host subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → TraceLayer / TimeoutLayer
//!     → session.rs (read or issue REACTO_SESSID)
//!     → handlers::view_error_intercept (?view_error=<id> answered here)
//!     → routes: POST /api/{call}, GET /api/calls, GET /errors/{id}, GET /health
//!     → ReactoApiService with the session's error store
//! ```

pub mod handlers;
pub mod server;
pub mod session;

pub use server::{shutdown_signal, AppState, GatewayServer};
pub use session::SessionId;
