//! dnssec_check library: DNSSEC status checks for domain names
//!
//! This library checks whether DNS zones are protected by DNSSEC. Every name is
//! looked up (NS records) through a DNSSEC-validating resolver and classified
//! as `secure`, `insecure` or `bogus`, or reported with the lookup error.
//! Batches are sorted so that failures and bogus names come first.
//!
//! # Example
//!
//! ```no_run
//! use dnssec_check::{check_batch, BatchOptions, HickoryConnector, SessionConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let names = "example.nl\nnlnetlabs.nl\n";
//! let results = check_batch(
//!     &HickoryConnector::new(),
//!     &SessionConfig::default(),
//!     &BatchOptions::default(),
//!     names.as_bytes(),
//! )
//! .await?;
//! results.emit(std::io::stdout())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod batch;
mod check;
pub mod config;
mod error_handling;
pub mod initialization;
mod resolver;
mod server;

// Re-export public API
pub use batch::{check_batch, check_single, read_names};
pub use check::{
    classify, BatchSummary, CheckResult, ResultCollection, SecurityStatus, Verdict, VerdictKind,
};
pub use config::{BatchOptions, Cli, Command, LogFormat, LogLevel, ServerConfig};
pub use error_handling::{BatchError, InitializationError, SessionError};
pub use resolver::{
    HickoryConnector, NsAnswer, QueryError, ResolverConnector, ResolverSession, SessionConfig,
    ValidatingResolver,
};
pub use run::{run_check, CheckReport};
pub use server::{router, start_server, AppState, CSV_CONTENT_TYPE};

// Internal run module (file-based batch checks for the CLI)
mod run {
    use std::fs::File;
    use std::io::{self, BufWriter};
    use std::path::{Path, PathBuf};
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;
    use tokio::io::AsyncReadExt;

    use crate::batch::check_batch;
    use crate::check::BatchSummary;
    use crate::config::BatchOptions;
    use crate::resolver::{ResolverConnector, SessionConfig};

    /// Results of a file-based batch check.
    #[derive(Debug, Clone)]
    pub struct CheckReport {
        /// Number of results written
        pub written: usize,
        /// Per-verdict counts
        pub summary: BatchSummary,
        /// Where the results went (`None` = stdout)
        pub output: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Checks every name in `file` (`-` reads stdin) and writes the sorted
    /// results as CSV to `output`, or stdout when `output` is `None`.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input cannot be read
    /// - The resolver session cannot be opened
    /// - The input is not valid CSV
    /// - The output cannot be created or written
    pub async fn run_check(
        connector: &dyn ResolverConnector,
        session: &SessionConfig,
        options: &BatchOptions,
        file: &Path,
        output: Option<&Path>,
    ) -> Result<CheckReport> {
        let start = Instant::now();
        let input = if file.as_os_str() == "-" {
            info!("Reading names from stdin");
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("Failed to read names from stdin")?;
            buf
        } else {
            tokio::fs::read(file)
                .await
                .with_context(|| format!("Failed to open input file: {}", file.display()))?
        };

        let results = check_batch(connector, session, options, &input[..])
            .await
            .context("Batch check failed")?;

        let written = match output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                results.emit(BufWriter::new(file))
            }
            None => results.emit(io::stdout().lock()),
        }
        .context("Failed to write results")?;

        Ok(CheckReport {
            written,
            summary: results.summary(),
            output: output.map(Path::to_path_buf),
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
