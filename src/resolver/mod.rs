//! Validating resolver access.
//!
//! DNSSEC validation itself is done by a validating stub resolver. This module
//! only defines the narrow interface the checker needs from it:
//! - [`ResolverConnector`] configures a fresh resolver from a [`SessionConfig`]
//! - [`ValidatingResolver`] answers NS queries with their security state
//! - [`ResolverSession`] scopes one configured resolver to one request
//!
//! [`HickoryConnector`] is the production backend.

mod hickory;
mod session;

#[cfg(test)]
pub(crate) mod stub;

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{DEFAULT_RESOLV_CONF, DEFAULT_TRUST_ANCHOR, DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::error_handling::SessionError;

// Re-export public API
pub use hickory::HickoryConnector;
pub use session::ResolverSession;

/// Settings applied every time a resolver session is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Resolver configuration file (resolv.conf format)
    pub resolv_conf: PathBuf,
    /// Trust anchor file with DNSKEY (or DS) records for the root
    pub trust_anchor: PathBuf,
    /// Timeout for a single DNS query
    pub timeout: Duration,
    /// Attempts per DNS query
    pub attempts: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            resolv_conf: PathBuf::from(DEFAULT_RESOLV_CONF),
            trust_anchor: PathBuf::from(DEFAULT_TRUST_ANCHOR),
            timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            attempts: DNS_ATTEMPTS,
        }
    }
}

/// Raw answer to an NS query, as reported by the validating resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NsAnswer {
    /// The answer section held NS records for the name
    pub has_data: bool,
    /// Every record validated up to the trust anchor
    pub secure: bool,
    /// Validation was attempted and failed
    pub bogus: bool,
    /// Validator explanation when `bogus` is set
    pub why_bogus: Option<String>,
}

impl NsAnswer {
    /// An answer without records.
    pub fn no_data() -> Self {
        Self::default()
    }

    /// Records validated successfully.
    pub fn secure() -> Self {
        Self {
            has_data: true,
            secure: true,
            ..Self::default()
        }
    }

    /// Records present, zone not signed.
    pub fn insecure() -> Self {
        Self {
            has_data: true,
            ..Self::default()
        }
    }

    /// Records present but validation failed for the given reason.
    pub fn bogus(why: impl Into<String>) -> Self {
        Self {
            has_data: true,
            bogus: true,
            why_bogus: Some(why.into()),
            ..Self::default()
        }
    }
}

/// The query itself failed (timeout, network or protocol error).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct QueryError {
    message: String,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A configured, DNSSEC-validating resolver.
///
/// Implementations must be usable through a shared reference; a batch may
/// issue several queries at once when its concurrency is above one.
#[async_trait]
pub trait ValidatingResolver: Send + Sync {
    /// Queries the NS records of `name` (class IN).
    async fn query_ns(&self, name: &str) -> Result<NsAnswer, QueryError>;
}

/// Creates configured resolvers.
pub trait ResolverConnector: Send + Sync {
    /// Configures a new resolver from the system resolver settings and trust
    /// anchor named in `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when either file is missing or unusable.
    fn connect(&self, config: &SessionConfig)
        -> Result<Box<dyn ValidatingResolver>, SessionError>;
}
