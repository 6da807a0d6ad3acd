//! Deterministic resolver used by unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{NsAnswer, QueryError, ResolverConnector, SessionConfig, ValidatingResolver};
use crate::error_handling::SessionError;

/// Connector returning canned answers and counting opened/closed handles.
#[derive(Clone, Default)]
pub(crate) struct StubConnector {
    answers: Arc<HashMap<String, Result<NsAnswer, QueryError>>>,
    fail_open: bool,
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
    queries: Arc<AtomicUsize>,
    last_config: Arc<Mutex<Option<SessionConfig>>>,
}

impl StubConnector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A connector whose every `connect` fails like a missing trust anchor.
    pub(crate) fn failing() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    pub(crate) fn with(mut self, name: &str, answer: Result<NsAnswer, QueryError>) -> Self {
        Arc::make_mut(&mut self.answers).insert(name.to_string(), answer);
        self
    }

    pub(crate) fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub(crate) fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub(crate) fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub(crate) fn last_config(&self) -> Option<SessionConfig> {
        self.last_config.lock().unwrap().clone()
    }
}

impl ResolverConnector for StubConnector {
    fn connect(
        &self,
        config: &SessionConfig,
    ) -> Result<Box<dyn ValidatingResolver>, SessionError> {
        *self.last_config.lock().unwrap() = Some(config.clone());
        if self.fail_open {
            return Err(SessionError::TrustAnchorRead {
                path: config.trust_anchor.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(StubResolver {
            answers: Arc::clone(&self.answers),
            closed: Arc::clone(&self.closed),
            queries: Arc::clone(&self.queries),
        }))
    }
}

struct StubResolver {
    answers: Arc<HashMap<String, Result<NsAnswer, QueryError>>>,
    closed: Arc<AtomicUsize>,
    queries: Arc<AtomicUsize>,
}

#[async_trait]
impl ValidatingResolver for StubResolver {
    async fn query_ns(&self, name: &str) -> Result<NsAnswer, QueryError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.answers
            .get(name)
            .cloned()
            .unwrap_or_else(|| Ok(NsAnswer::no_data()))
    }
}

impl Drop for StubResolver {
    fn drop(&mut self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}
