//! Application state management

use std::sync::Arc;

use crate::cms::DocumentStore;
use crate::config::Config;

/// Shared application state
///
/// Constructed once in `main` and injected into the router; the document
/// store is never reachable as ambient global state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: DocumentStore,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config, store: DocumentStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the document store
    pub fn store(&self) -> &DocumentStore {
        &self.inner.store
    }
}
