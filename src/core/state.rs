//! Shared server state

use std::sync::Arc;

use crate::core::Config;
use crate::db::repository::CatalogRepository;

/// Server state: configuration plus the repository backend, cloned
/// cheaply into every handler.
///
/// The backend is constructed once at startup and injected here; no
/// handler re-selects or re-connects per request.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration (immutable)
    pub config: Config,
    /// The one repository backend for this process
    pub repo: Arc<dyn CatalogRepository>,
}

impl ServerState {
    pub fn new(config: Config, repo: Arc<dyn CatalogRepository>) -> Self {
        Self { config, repo }
    }
}
