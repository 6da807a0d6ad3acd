//! Per-verdict counts of a batch.

use std::collections::HashMap;
use std::fmt;

use strum::IntoEnumIterator;

use super::{CheckResult, VerdictKind};

/// Number of results per verdict kind. Every kind is present, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    counts: HashMap<VerdictKind, usize>,
}

impl BatchSummary {
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for kind in VerdictKind::iter() {
            counts.insert(kind, 0);
        }
        BatchSummary { counts }
    }

    pub fn from_results<'a>(results: impl Iterator<Item = &'a CheckResult>) -> Self {
        let mut summary = Self::new();
        for result in results {
            summary.record(result.verdict().kind());
        }
        summary
    }

    pub fn record(&mut self, kind: VerdictKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    pub fn count(&self, kind: VerdictKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl Default for BatchSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} names", self.total())?;
        for kind in VerdictKind::iter() {
            write!(f, ", {} {}", self.count(kind), kind.as_str())?;
        }
        Ok(())
    }
}
