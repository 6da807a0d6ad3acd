//! Tests for file-based batch checks.

mod helpers;

use std::io::Write;
use std::path::Path;

use dnssec_check::{run_check, BatchOptions, SessionConfig, VerdictKind};
use helpers::StubConnector;
use tempfile::{NamedTempFile, TempDir};

#[tokio::test]
async fn test_run_check_writes_sorted_csv() {
    let mut input = NamedTempFile::new().unwrap();
    writeln!(input, "example.nl,customer 1").unwrap();
    writeln!(input, "bogus.example,customer 2").unwrap();
    writeln!(input, "broken.example,customer 3").unwrap();
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("results.csv");

    let connector = StubConnector::scenario();
    let report = run_check(
        &connector,
        &SessionConfig::default(),
        &BatchOptions::default(),
        input.path(),
        Some(&output),
    )
    .await
    .unwrap();

    assert_eq!(report.written, 3);
    assert_eq!(report.summary.count(VerdictKind::Failed), 1);
    assert_eq!(report.summary.count(VerdictKind::Bogus), 1);
    assert_eq!(report.summary.count(VerdictKind::Secure), 1);
    assert_eq!(report.output.as_deref(), Some(output.as_path()));

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "broken.example,timeout,,\n\
         bogus.example,,bogus,signature expired\n\
         example.nl,,secure,\n"
    );
    assert_eq!(connector.opened(), 1);
    assert_eq!(connector.closed(), 1);
}

#[tokio::test]
async fn test_run_check_missing_input_file() {
    let connector = StubConnector::scenario();
    let err = run_check(
        &connector,
        &SessionConfig::default(),
        &BatchOptions::default(),
        Path::new("/nonexistent/dnssec_check/names.csv"),
        None,
    )
    .await
    .unwrap_err();
    assert!(format!("{err:#}").contains("Failed to open input file"));
    assert_eq!(connector.opened(), 0);
}

#[tokio::test]
async fn test_run_check_session_failure() {
    let mut input = NamedTempFile::new().unwrap();
    writeln!(input, "example.nl").unwrap();
    let connector = StubConnector::failing();
    let err = run_check(
        &connector,
        &SessionConfig::default(),
        &BatchOptions::default(),
        input.path(),
        None,
    )
    .await
    .unwrap_err();
    assert!(format!("{err:#}").contains("trust anchor"));
}
