//! Request-scoped resolver sessions.

use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use super::{NsAnswer, QueryError, ResolverConnector, SessionConfig, ValidatingResolver};
use crate::error_handling::SessionError;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// One configured resolver, owned by one check request.
///
/// The configuration is reapplied on every [`open`](Self::open); sessions are
/// never cached or shared between requests. The resolver handle is released
/// when the session is dropped, which covers early returns and `?` as well as
/// the explicit [`close`](Self::close).
pub struct ResolverSession {
    id: u64,
    resolver: Box<dyn ValidatingResolver>,
}

impl ResolverSession {
    /// Configures a fresh resolver through `connector`.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the resolver configuration or trust
    /// anchor cannot be loaded. Callers must abort the request; there is no
    /// unvalidated fallback.
    pub fn open(
        connector: &dyn ResolverConnector,
        config: &SessionConfig,
    ) -> Result<Self, SessionError> {
        let resolver = connector.connect(config)?;
        let id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
        debug!(
            "Opened resolver session {id} (resolv.conf: {}, trust anchor: {})",
            config.resolv_conf.display(),
            config.trust_anchor.display()
        );
        Ok(Self { id, resolver })
    }

    /// Issues an NS query through this session's resolver.
    pub async fn query_ns(&self, name: &str) -> Result<NsAnswer, QueryError> {
        self.resolver.query_ns(name).await
    }

    /// Releases the session. Consuming `self` rules out any later query.
    pub fn close(self) {
        drop(self);
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ResolverSession {
    fn drop(&mut self) {
        debug!("Closed resolver session {}", self.id);
    }
}
