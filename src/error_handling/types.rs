//! Error type definitions.
//!
//! Only configuration and input errors are modelled here. A failed DNS query
//! for a single name is recorded in that name's result instead.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A resolver session could not be opened.
///
/// Fatal for the enclosing request: the check is aborted instead of falling
/// back to a lookup without DNSSEC validation.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The resolver configuration file could not be read.
    #[error("Failed to read resolver configuration {}: {source}", path.display())]
    ResolvConfRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resolver configuration file could not be parsed.
    #[error("Invalid resolver configuration {}: {message}", path.display())]
    ResolvConfInvalid { path: PathBuf, message: String },

    /// The trust anchor file could not be read.
    #[error("Failed to read trust anchor {}: {source}", path.display())]
    TrustAnchorRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The trust anchor file holds no usable keys.
    #[error("Invalid trust anchor {}: {message}", path.display())]
    TrustAnchorInvalid { path: PathBuf, message: String },
}

/// Errors that abort a whole batch run.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The resolver session for the batch could not be opened.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The name list could not be read or decoded.
    #[error("Failed to read name list: {0}")]
    Input(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_messages_name_the_path() {
        let err = SessionError::ResolvConfRead {
            path: PathBuf::from("/nonexistent/resolv.conf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nonexistent/resolv.conf"));
        assert!(msg.contains("not found"));

        let err = SessionError::TrustAnchorInvalid {
            path: PathBuf::from("Kroot.key"),
            message: "no DNSKEY records".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid trust anchor Kroot.key: no DNSKEY records"
        );
    }

    #[test]
    fn test_batch_error_from_session_error_is_transparent() {
        let session = SessionError::ResolvConfInvalid {
            path: PathBuf::from("/etc/resolv.conf"),
            message: "bad line".to_string(),
        };
        let expected = session.to_string();
        let err = BatchError::from(session);
        assert!(matches!(err, BatchError::Session(_)));
        assert_eq!(err.to_string(), expected);
    }
}
