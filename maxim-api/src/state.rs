//! Application state for the API server.

use maxim_core::QuoteCatalog;

use crate::config::ApiConfig;

/// Shared application state.
///
/// The catalog is immutable after construction, so the state needs no
/// interior mutability and any number of handlers may read it at once.
#[derive(Debug)]
pub struct AppState {
    /// API configuration
    pub config: ApiConfig,
    /// The quote catalog all queries run against
    pub catalog: QuoteCatalog,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: ApiConfig, catalog: QuoteCatalog) -> Self {
        Self { config, catalog }
    }
}
