// Shared test helpers: a deterministic resolver connector.
//
// Answers are fixed per name and every opened and released resolver handle is
// counted, so tests can check that each request releases its session once.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dnssec_check::{
    NsAnswer, QueryError, ResolverConnector, SessionConfig, SessionError, ValidatingResolver,
};

#[derive(Clone, Default)]
pub struct StubConnector {
    answers: Arc<HashMap<String, Result<NsAnswer, QueryError>>>,
    fail_open: bool,
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl StubConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver answering the names of the three-name example batch.
    pub fn scenario() -> Self {
        Self::new()
            .with("example.nl", Ok(NsAnswer::secure()))
            .with("bogus.example", Ok(NsAnswer::bogus("signature expired")))
            .with("broken.example", Err(QueryError::new("timeout")))
            .with("unsigned.example", Ok(NsAnswer::insecure()))
    }

    pub fn failing() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    pub fn with(mut self, name: &str, answer: Result<NsAnswer, QueryError>) -> Self {
        Arc::make_mut(&mut self.answers).insert(name.to_string(), answer);
        self
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

impl ResolverConnector for StubConnector {
    fn connect(
        &self,
        config: &SessionConfig,
    ) -> Result<Box<dyn ValidatingResolver>, SessionError> {
        if self.fail_open {
            return Err(SessionError::TrustAnchorRead {
                path: config.trust_anchor.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
            });
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(StubResolver {
            answers: Arc::clone(&self.answers),
            closed: Arc::clone(&self.closed),
        }))
    }
}

struct StubResolver {
    answers: Arc<HashMap<String, Result<NsAnswer, QueryError>>>,
    closed: Arc<AtomicUsize>,
}

#[async_trait]
impl ValidatingResolver for StubResolver {
    async fn query_ns(&self, name: &str) -> Result<NsAnswer, QueryError> {
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
