//! Transport failure capture and the debug viewer.
//!
//! # Data Flow
//! ```text
//! Capture (dispatcher failure):
//!     reporter.rs builds ErrorRecord (random 128-bit id, redacted arguments)
//!     → one pipe-delimited error log line
//!     → store.rs keeps it in the caller's bounded ErrorLog (oldest evicted)
//!     → page.rs renders the failure page showing only the id
//!
//! View (?view_error=<id> or /errors/{id}):
//!     viewer.rs validates the id (32 hex chars)
//!     → looks it up in the same store
//!     → 400 / 404 JSON error, or the pretty-printed record
//! ```
//!
//! # Design Decisions
//! - Stores are behind the `ErrorStore` trait; the HTTP host scopes one per
//!   session, library users can use a plain `MemoryErrorStore`
//! - The viewer is unauthenticated: knowing the id is the only credential

pub mod page;
pub mod record;
pub mod reporter;
pub mod store;
pub mod viewer;

pub use page::{render_failure_page, ERROR_ID_PLACEHOLDER};
pub use record::{ErrorId, ErrorRecord};
pub use reporter::{CapturedFailure, ErrorReporter};
pub use store::{ErrorLog, ErrorStore, MemoryErrorStore, SessionErrorStores, SessionScope};
pub use viewer::{view_error, ErrorView, ViewError};
