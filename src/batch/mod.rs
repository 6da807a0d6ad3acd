//! Single-name and batch check entry points.
//!
//! Both open one resolver session per call, reuse it for every name of the
//! call and release it before returning, whether the call succeeds or not.

use std::io::Read;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use log::info;

use crate::check::{classify, CheckResult, ResultCollection};
use crate::config::{BatchOptions, LOGGING_INTERVAL};
use crate::error_handling::{BatchError, SessionError};
use crate::resolver::{ResolverConnector, ResolverSession, SessionConfig};

/// Checks a single name under a fresh resolver session.
///
/// # Errors
///
/// Returns a [`SessionError`] if the session cannot be opened. A failed DNS
/// query is not an error; it is reported in the returned result.
pub async fn check_single(
    connector: &dyn ResolverConnector,
    config: &SessionConfig,
    name: &str,
) -> Result<CheckResult, SessionError> {
    let session = ResolverSession::open(connector, config)?;
    let result = classify(&session, name).await;
    session.close();
    Ok(result)
}

/// Checks every name of a CSV name list and returns the results sorted for
/// emission.
///
/// The first field of each record is the name; other fields are ignored and
/// blank lines are skipped. The whole list is read before the first query, so
/// a read or decode error aborts the run before any result exists. Names are
/// classified against one shared session, at most `options.concurrency` at a
/// time; the final order depends only on [`ResultCollection::sort_for_emission`].
///
/// # Errors
///
/// - [`BatchError::Session`] if the resolver session cannot be opened
/// - [`BatchError::Input`] if the name list cannot be read or decoded
pub async fn check_batch<R: Read>(
    connector: &dyn ResolverConnector,
    config: &SessionConfig,
    options: &BatchOptions,
    input: R,
) -> Result<ResultCollection, BatchError> {
    let session = ResolverSession::open(connector, config)?;
    let names = read_names(input)?;
    let total = names.len();
    info!("Checking {total} names (session {})", session.id());

    let start = Instant::now();
    let mut all = ResultCollection::with_capacity(total);
    {
        let checks: Vec<_> = names.iter().map(|name| classify(&session, name)).collect();
        let mut results = stream::iter(checks).buffered(options.concurrency.max(1));
        while let Some(result) = results.next().await {
            all.append(result);
            if all.len() % LOGGING_INTERVAL == 0 {
                log_progress(start, all.len(), total);
            }
        }
    }
    session.close();

    all.sort_for_emission();
    info!(
        "Batch finished in {:.2}s: {}",
        start.elapsed().as_secs_f64(),
        all.summary()
    );
    Ok(all)
}

/// Reads the first field of every CSV record in `input`.
///
/// # Errors
///
/// Returns the first I/O or decoding error (for example invalid UTF-8).
pub fn read_names<R: Read>(input: R) -> Result<Vec<String>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut names = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(name) = record.get(0) {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

fn log_progress(start: Instant, completed: usize, total: usize) {
    let elapsed_secs = start.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Checked {} of {} names in {:.2} seconds (~{:.2} names/sec)",
        completed, total, elapsed_secs, rate
    );
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
