//! Application initialization.
//!
//! This module provides functions to initialize process-wide resources:
//! - Logger (plain or JSON format)
//! - Default resolver connector
//!
//! Resolver sessions are not created here; they are opened per request.

mod logger;

use std::sync::Arc;

use crate::resolver::{HickoryConnector, ResolverConnector};

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the production resolver connector.
///
/// # Returns
///
/// An `Arc<dyn ResolverConnector>` that can be shared across request handlers.
pub fn init_connector() -> Arc<dyn ResolverConnector> {
    Arc::new(HickoryConnector::new())
}
