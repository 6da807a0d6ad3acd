//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dnssec_check` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dnssec_check::initialization::{init_connector, init_logger_with};
use dnssec_check::{
    run_check, start_server, BatchOptions, Cli, Command, ServerConfig, SessionConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Settings such as DNSSEC_CHECK_TRUST_ANCHOR may come from a .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let session = SessionConfig::from(cli.resolver.clone());
    let connector = init_connector();

    match cli.command {
        Command::Serve {
            listen,
            concurrency,
            max_upload_bytes,
        } => {
            let config = ServerConfig {
                listen,
                max_upload_bytes,
                batch: BatchOptions { concurrency },
                session,
            };
            if let Err(e) = start_server(config, connector).await {
                eprintln!("dnssec_check error: {:#}", e);
                process::exit(1);
            }
        }
        Command::Check {
            file,
            output,
            concurrency,
        } => {
            let options = BatchOptions { concurrency };
            match run_check(
                connector.as_ref(),
                &session,
                &options,
                &file,
                output.as_deref(),
            )
            .await
            {
                Ok(report) => {
                    // stdout may carry the CSV, so the summary goes to stderr
                    eprintln!(
                        "✅ Checked {} name{} in {:.1}s ({})",
                        report.written,
                        if report.written == 1 { "" } else { "s" },
                        report.elapsed_seconds,
                        report.summary
                    );
                    if let Some(path) = report.output {
                        eprintln!("Results saved in {}", path.display());
                    }
                }
                Err(e) => {
                    eprintln!("dnssec_check error: {:#}", e);
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}
