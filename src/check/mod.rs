//! DNSSEC verdicts for checked names.
//!
//! A checked name ends up in exactly one [`Verdict`]. On the wire a result is
//! the four-column record `name,errorText,status,why`:
//!
//! | verdict    | errorText | status   | why           |
//! |------------|-----------|----------|---------------|
//! | `Secure`   |           | secure   |               |
//! | `Insecure` |           | insecure |               |
//! | `Bogus`    |           | bogus    | validator why |
//! | `NoData`   | nodata    |          |               |
//! | `Failed`   | message   |          |               |

mod classify;
mod collection;
mod summary;

use std::fmt;

use strum_macros::EnumIter as EnumIterMacro;

use crate::config::NODATA_TEXT;

// Re-export public API
pub use classify::classify;
pub use collection::ResultCollection;
pub use summary::BatchSummary;

/// DNSSEC security state of a name whose NS query returned data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityStatus {
    Secure,
    Insecure,
    Bogus,
}

impl SecurityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityStatus::Secure => "secure",
            SecurityStatus::Insecure => "insecure",
            SecurityStatus::Bogus => "bogus",
        }
    }
}

impl fmt::Display for SecurityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Signature chain validated up to the trust anchor
    Secure,
    /// Zone is not signed
    Insecure,
    /// Zone is signed but validation failed
    Bogus { why: String },
    /// The query succeeded without returning data
    NoData,
    /// The query itself failed
    Failed(String),
}

impl Verdict {
    /// Security status, if the name could be classified at all.
    pub fn status(&self) -> Option<SecurityStatus> {
        match self {
            Verdict::Secure => Some(SecurityStatus::Secure),
            Verdict::Insecure => Some(SecurityStatus::Insecure),
            Verdict::Bogus { .. } => Some(SecurityStatus::Bogus),
            Verdict::NoData | Verdict::Failed(_) => None,
        }
    }

    /// Emission priority: failures first, then bogus, insecure, secure.
    ///
    /// Matches ordering on the status column as a plain string, where the
    /// empty status of a failure sorts before "bogus" < "insecure" < "secure".
    pub fn rank(&self) -> u8 {
        match self {
            Verdict::NoData | Verdict::Failed(_) => 0,
            Verdict::Bogus { .. } => 1,
            Verdict::Insecure => 2,
            Verdict::Secure => 3,
        }
    }

    pub fn kind(&self) -> VerdictKind {
        match self {
            Verdict::Secure => VerdictKind::Secure,
            Verdict::Insecure => VerdictKind::Insecure,
            Verdict::Bogus { .. } => VerdictKind::Bogus,
            Verdict::NoData => VerdictKind::NoData,
            Verdict::Failed(_) => VerdictKind::Failed,
        }
    }
}

/// Fieldless mirror of [`Verdict`], used for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum VerdictKind {
    Secure,
    Insecure,
    Bogus,
    NoData,
    Failed,
}

impl VerdictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictKind::Secure => "secure",
            VerdictKind::Insecure => "insecure",
            VerdictKind::Bogus => "bogus",
            VerdictKind::NoData => "nodata",
            VerdictKind::Failed => "failed",
        }
    }
}

/// Verdict for one checked name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    name: String,
    verdict: Verdict,
}

impl CheckResult {
    /// Builds a result; `name` is stored trimmed.
    pub fn new(name: &str, verdict: Verdict) -> Self {
        Self {
            name: name.trim().to_string(),
            verdict,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// `errorText` column: the query failure, `nodata`, or empty.
    pub fn error_text(&self) -> &str {
        match &self.verdict {
            Verdict::Failed(message) => message,
            Verdict::NoData => NODATA_TEXT,
            _ => "",
        }
    }

    /// `status` column: `secure`, `insecure`, `bogus`, or empty.
    pub fn status(&self) -> &str {
        self.verdict.status().map_or("", |s| s.as_str())
    }

    /// `why` column: the validator's reason for a bogus verdict, or empty.
    pub fn why(&self) -> &str {
        match &self.verdict {
            Verdict::Bogus { why } => why,
            _ => "",
        }
    }

    /// The four wire columns in order.
    pub fn to_record(&self) -> [&str; 4] {
        [self.name(), self.error_text(), self.status(), self.why()]
    }

    /// Encodes this result as one CSV line including the trailing newline.
    pub fn to_csv_line(&self) -> Result<Vec<u8>, csv::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(self.to_record())?;
        writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::Bogus { why } => write!(f, "{}: bogus ({why})", self.name),
            Verdict::Failed(message) => write!(f, "{}: error ({message})", self.name),
            Verdict::NoData => write!(f, "{}: {NODATA_TEXT}", self.name),
            _ => write!(f, "{}: {}", self.name, self.status()),
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
