//! Configuration constants.
//!
//! This module defines the defaults used throughout the application: resolver
//! configuration paths, DNS timeouts, HTTP limits and logging intervals.

/// Default resolver configuration file read by every resolver session.
pub const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";

/// Default trust anchor file (root zone DNSKEY records in zone file format).
pub const DEFAULT_TRUST_ANCHOR: &str = "Kroot.key";

/// Default address the HTTP server listens on.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

// Network operation timeouts
/// DNS query timeout in seconds
/// Validation may need several round trips up the chain of trust, so this is
/// longer than a plain stub lookup would need
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Number of attempts per DNS query before the resolver gives up
pub const DNS_ATTEMPTS: usize = 2;

/// Default number of names checked concurrently within one batch.
///
/// `1` keeps the batch strictly sequential against its single session.
pub const DEFAULT_BATCH_CONCURRENCY: usize = 1;

/// Upper bound accepted for `--concurrency`.
pub const MAX_BATCH_CONCURRENCY: usize = 64;

/// Maximum accepted upload size in bytes for `/upload` (2MB)
pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// Multipart field carrying the uploaded name list.
pub const UPLOAD_FIELD_NAME: &str = "domainlist";

/// Log batch progress every N checked names
pub const LOGGING_INTERVAL: usize = 50;

/// Error text recorded for a name that returned no data.
pub const NODATA_TEXT: &str = "nodata";

/// Error text recorded for a name that is empty after trimming.
pub const EMPTY_NAME_TEXT: &str = "empty name";
