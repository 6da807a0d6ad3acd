//! Ordered collection of batch results.

use std::io::Write;

use csv::Writer;

use super::{BatchSummary, CheckResult};

/// Results of one batch run, in append order until sorted.
///
/// Owned by the batch that fills it; there is a single writer.
#[derive(Debug, Clone, Default)]
pub struct ResultCollection {
    results: Vec<CheckResult>,
}

impl ResultCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Vec::with_capacity(capacity),
        }
    }

    pub fn append(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CheckResult> {
        self.results.iter()
    }

    /// Orders results for emission: failures and no-data first, then bogus,
    /// insecure and finally secure names. Ties keep their append order.
    pub fn sort_for_emission(&mut self) {
        self.results.sort_by_key(|result| result.verdict().rank());
    }

    /// Writes every result as one CSV record, flushing after each so a slow
    /// consumer sees progress.
    ///
    /// # Returns
    ///
    /// The number of records written.
    ///
    /// # Errors
    ///
    /// Returns the first write or flush error; records already written stay
    /// written.
    pub fn emit<W: Write>(&self, writer: W) -> Result<usize, csv::Error> {
        let mut writer = Writer::from_writer(writer);
        for result in &self.results {
            writer.write_record(result.to_record())?;
            writer.flush()?;
        }
        Ok(self.results.len())
    }

    /// Per-verdict counts of the collected results.
    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_results(self.results.iter())
    }
}

impl IntoIterator for ResultCollection {
    type Item = CheckResult;
    type IntoIter = std::vec::IntoIter<CheckResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultCollection {
    type Item = &'a CheckResult;
    type IntoIter = std::slice::Iter<'a, CheckResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl FromIterator<CheckResult> for ResultCollection {
    fn from_iter<I: IntoIterator<Item = CheckResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}
