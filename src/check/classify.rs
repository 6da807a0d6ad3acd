//! Mapping a resolver answer to a verdict.

use log::{debug, info};

use super::{CheckResult, Verdict};
use crate::config::EMPTY_NAME_TEXT;
use crate::resolver::{NsAnswer, ResolverSession};

/// Checks one name through `session`.
///
/// Issues an NS query for the trimmed name and classifies the answer:
/// query failure, no data, then secure before bogus before insecure. An empty
/// name is reported as a failure without querying. Never returns an error;
/// every outcome is a [`CheckResult`].
pub async fn classify(session: &ResolverSession, name: &str) -> CheckResult {
    let name = name.trim();
    if name.is_empty() {
        return CheckResult::new(name, Verdict::Failed(EMPTY_NAME_TEXT.to_string()));
    }

    info!("checking {name}");
    let verdict = match session.query_ns(name).await {
        Ok(answer) => verdict_for(answer),
        Err(e) => Verdict::Failed(e.to_string()),
    };
    let result = CheckResult::new(name, verdict);
    debug!("{result}");
    result
}

fn verdict_for(answer: NsAnswer) -> Verdict {
    if !answer.has_data {
        Verdict::NoData
    } else if answer.secure {
        Verdict::Secure
    } else if answer.bogus {
        Verdict::Bogus {
            why: answer.why_bogus.unwrap_or_default(),
        }
    } else {
        Verdict::Insecure
    }
}
