//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_BATCH_CONCURRENCY, DEFAULT_LISTEN_ADDR, DEFAULT_RESOLV_CONF, DEFAULT_TRUST_ANCHOR,
    DNS_ATTEMPTS, DNS_TIMEOUT_SECS, MAX_BATCH_CONCURRENCY, MAX_UPLOAD_BYTES,
};
use crate::resolver::SessionConfig;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line interface of the `dnssec_check` binary.
#[derive(Debug, Parser)]
#[command(name = "dnssec_check", version, about)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true, env = "DNSSEC_CHECK_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub resolver: ResolverArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the check endpoints over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_LISTEN_ADDR, env = "DNSSEC_CHECK_LISTEN")]
        listen: SocketAddr,

        /// Names checked concurrently within one uploaded batch
        #[arg(long, default_value_t = DEFAULT_BATCH_CONCURRENCY, value_parser = parse_concurrency)]
        concurrency: usize,

        /// Maximum size of an uploaded name list in bytes
        #[arg(long, default_value_t = MAX_UPLOAD_BYTES)]
        max_upload_bytes: usize,
    },
    /// Check every name in a CSV file and print the sorted results
    Check {
        /// CSV file whose first column holds the names (`-` reads stdin)
        file: PathBuf,

        /// Write results to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Names checked concurrently
        #[arg(long, default_value_t = DEFAULT_BATCH_CONCURRENCY, value_parser = parse_concurrency)]
        concurrency: usize,
    },
}

/// Resolver settings shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct ResolverArgs {
    /// Resolver configuration file (nameservers, search options)
    #[arg(long, default_value = DEFAULT_RESOLV_CONF, global = true, env = "DNSSEC_CHECK_RESOLV_CONF")]
    pub resolv_conf: PathBuf,

    /// Trust anchor file with the root DNSKEY records
    #[arg(long, default_value = DEFAULT_TRUST_ANCHOR, global = true, env = "DNSSEC_CHECK_TRUST_ANCHOR")]
    pub trust_anchor: PathBuf,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS, global = true)]
    pub dns_timeout_secs: u64,

    /// Attempts per DNS query
    #[arg(long, default_value_t = DNS_ATTEMPTS, global = true)]
    pub dns_attempts: usize,
}

impl From<ResolverArgs> for SessionConfig {
    fn from(args: ResolverArgs) -> Self {
        SessionConfig {
            resolv_conf: args.resolv_conf,
            trust_anchor: args.trust_anchor,
            timeout: Duration::from_secs(args.dns_timeout_secs),
            attempts: args.dns_attempts,
        }
    }
}

fn parse_concurrency(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a positive number"))?;
    if value == 0 || value > MAX_BATCH_CONCURRENCY {
        return Err(format!(
            "concurrency must be between 1 and {MAX_BATCH_CONCURRENCY}"
        ));
    }
    Ok(value)
}

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Maximum number of names classified at the same time.
    ///
    /// Values below 1 are treated as 1.
    pub concurrency: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_BATCH_CONCURRENCY,
        }
    }
}

/// HTTP server configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use dnssec_check::ServerConfig;
///
/// let config = ServerConfig {
///     listen: "0.0.0.0:8080".parse().unwrap(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub listen: SocketAddr,

    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,

    /// Options applied to every uploaded batch
    pub batch: BatchOptions,

    /// Resolver session settings, reapplied for every request
    pub session: SessionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 8080)),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            batch: BatchOptions::default(),
            session: SessionConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["dnssec_check", "serve"]).unwrap();
        assert_eq!(cli.resolver.resolv_conf, PathBuf::from(DEFAULT_RESOLV_CONF));
        assert_eq!(cli.resolver.trust_anchor, PathBuf::from(DEFAULT_TRUST_ANCHOR));
        match cli.command {
            Command::Serve {
                listen,
                concurrency,
                max_upload_bytes,
            } => {
                assert_eq!(listen, DEFAULT_LISTEN_ADDR.parse::<SocketAddr>().unwrap());
                assert_eq!(concurrency, 1);
                assert_eq!(max_upload_bytes, MAX_UPLOAD_BYTES);
            }
            Command::Check { .. } => panic!("expected serve"),
        }
    }

    #[test]
    fn test_check_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "dnssec_check",
            "check",
            "names.csv",
            "--trust-anchor",
            "/etc/unbound/root.key",
            "--concurrency",
            "8",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(
            cli.resolver.trust_anchor,
            PathBuf::from("/etc/unbound/root.key")
        );
        assert!(matches!(cli.log_format, LogFormat::Json));
        match cli.command {
            Command::Check {
                file,
                output,
                concurrency,
            } => {
                assert_eq!(file, PathBuf::from("names.csv"));
                assert!(output.is_none());
                assert_eq!(concurrency, 8);
            }
            Command::Serve { .. } => panic!("expected check"),
        }
    }

    #[test]
    fn test_concurrency_bounds_rejected() {
        assert!(Cli::try_parse_from(["dnssec_check", "serve", "--concurrency", "0"]).is_err());
        assert!(Cli::try_parse_from(["dnssec_check", "serve", "--concurrency", "65"]).is_err());
        assert!(Cli::try_parse_from(["dnssec_check", "serve", "--concurrency", "x"]).is_err());
    }

    #[test]
    fn test_resolver_args_into_session_config() {
        let args = ResolverArgs {
            resolv_conf: PathBuf::from("/tmp/resolv.conf"),
            trust_anchor: PathBuf::from("/tmp/root.key"),
            dns_timeout_secs: 9,
            dns_attempts: 4,
        };
        let config = SessionConfig::from(args);
        assert_eq!(config.resolv_conf, PathBuf::from("/tmp/resolv.conf"));
        assert_eq!(config.trust_anchor, PathBuf::from("/tmp/root.key"));
        assert_eq!(config.timeout, Duration::from_secs(9));
        assert_eq!(config.attempts, 4);
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.listen.port(), 8080);
        assert_eq!(config.max_upload_bytes, MAX_UPLOAD_BYTES);
        assert_eq!(config.batch.concurrency, 1);
    }
}
