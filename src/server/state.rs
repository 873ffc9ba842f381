//! Server shared state
//!
//! Holds configuration and the port catalog for the HTTP server. The
//! catalog is built once at startup and shared read-only across requests.

use crate::catalog::PortCatalog;
use crate::config::Config;
use crate::constants::data;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,

    /// Merged port catalog, immutable after construction
    catalog: PortCatalog,
}

impl AppState {
    /// Create new application state
    ///
    /// Builds the catalog from configured source paths, falling back to
    /// the bundled data per source.
    pub fn new(config: Config) -> Self {
        let canonical = match &config.data.ports_path {
            Some(path) => std::fs::read_to_string(path).unwrap_or_default(),
            None => data::CANONICAL_PORTS_JSON.to_string(),
        };
        let sea_guide = match &config.data.sea_guide_path {
            Some(path) => std::fs::read_to_string(path).unwrap_or_default(),
            None => data::SEA_GUIDE_JSON.to_string(),
        };
        let catalog = PortCatalog::from_sources(&canonical, &sea_guide);

        Self {
            config: Arc::new(RwLock::new(config)),
            catalog,
        }
    }

    /// The shared port catalog
    pub fn catalog(&self) -> &PortCatalog {
        &self.catalog
    }
}
