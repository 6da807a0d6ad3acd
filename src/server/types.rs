//! Server data structures.

use std::sync::Arc;

use crate::config::BatchOptions;
use crate::resolver::{ResolverConnector, SessionConfig};

/// Content type of every result response.
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Shared, read-only state of the check server.
///
/// Holds only configuration. Each request opens its own resolver session from
/// it, so concurrent requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub connector: Arc<dyn ResolverConnector>,
    pub session: Arc<SessionConfig>,
    pub batch: BatchOptions,
}

impl AppState {
    pub fn new(
        connector: Arc<dyn ResolverConnector>,
        session: SessionConfig,
        batch: BatchOptions,
    ) -> Self {
        Self {
            connector,
            session: Arc::new(session),
            batch,
        }
    }
}
