//! Application state shared across all request handlers.

use std::path::Path;
use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError, Portraits};
use crate::config::Config;

/// Shared application state available to all request handlers.
///
/// Everything inside is immutable after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Philosophy catalog.
    pub catalog: Arc<Catalog>,

    /// Philosopher portraits present in the public directory.
    pub portraits: Arc<Portraits>,
}

impl AppState {
    /// Create a new application state from configuration and the built-in catalog.
    pub fn new(config: Config) -> Result<Self, CatalogError> {
        let catalog = Catalog::builtin()?;
        let portraits = Portraits::scan(Path::new(&config.public_dir));

        tracing::info!(
            categories = catalog.categories().len(),
            philosophies = catalog.len(),
            portraits = portraits.len(),
            "application state initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            portraits: Arc::new(portraits),
        })
    }
}
