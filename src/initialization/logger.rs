//! Logger setup for the check service.

use std::io::Write;

use colored::*;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Installs the process-wide logger.
///
/// `RUST_LOG` is applied first. `level` then sets the default and the
/// `dnssec_check` target, so `--log-level` always decides how chatty the
/// checker itself is; `RUST_LOG` still tunes every other target. Resolver
/// and HTTP internals are clamped to keep per-name output readable.
///
/// ```bash
/// # Debug output from the checker
/// dnssec_check --log-level debug check names.csv
///
/// # Also show hickory's validation chatter
/// RUST_LOG=hickory_proto=debug dnssec_check --log-level debug serve
/// ```
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already
/// installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .filter_module("hyper", LevelFilter::Info)
        .filter_module("axum", LevelFilter::Info)
        .filter_module("hickory_proto", LevelFilter::Error)
        .filter_module("hickory_resolver", LevelFilter::Warn)
        .filter_module("dnssec_check", level);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            let line = json_line(chrono::Utc::now().timestamp_millis(), record);
            writeln!(buf, "{line}")
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {} [{}] {}",
                level_marker(record.level()),
                record.target().cyan(),
                colored_level(record.level()),
                record.args()
            )
        }),
    };

    builder.try_init()?;
    Ok(())
}

/// One JSON object per log record; the message is escaped by `serde_json`.
fn json_line(timestamp_millis: i64, record: &Record<'_>) -> String {
    let message = serde_json::to_string(&record.args().to_string())
        .unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "{{\"ts\":{timestamp_millis},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{message}}}",
        record.level(),
        record.target()
    )
}

fn colored_level(level: Level) -> ColoredString {
    let text = level.to_string();
    match level {
        Level::Error => text.red(),
        Level::Warn => text.yellow(),
        Level::Info => text.green(),
        Level::Debug => text.blue(),
        Level::Trace => text.purple(),
    }
}

fn level_marker(level: Level) -> &'static str {
    match level {
        Level::Error => "❌",
        Level::Warn => "⚠️",
        Level::Info => "✔️",
        Level::Debug => "🔍",
        Level::Trace => "🔬",
    }
}
