//! Error handling.
//!
//! Errors are split by how far they propagate:
//! - **Initialization errors**: logger setup, fatal for the process
//! - **Session errors**: resolver configuration or trust anchor unusable,
//!   fatal for the request that opened the session
//! - **Batch errors**: a session error or an unreadable name list, fatal for
//!   the whole batch
//!
//! Per-name DNS failures never show up here; they become part of that name's
//! `CheckResult`.

mod types;

// Re-export public API
pub use types::{BatchError, InitializationError, SessionError};
