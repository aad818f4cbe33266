//! Application state for the Availability & Filtering Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, RwLock};

use crate::config::Catalog;

/// Shared application state.
///
/// Holds the current catalog snapshot. Each request clones the inner `Arc`
/// under a read lock held only for the clone, so a search always evaluates
/// against one consistent snapshot even if a new catalog is swapped in
/// mid-flight. [`AppState::replace`] swaps the whole snapshot atomically;
/// in-flight requests keep the one they started with.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<RwLock<Arc<Catalog>>>,
}

impl AppState {
    /// Creates a new application state holding the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// Returns the current catalog snapshot.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.catalog
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replaces the catalog with a new snapshot.
    pub fn replace(&self, catalog: Catalog) {
        let mut guard = self
            .catalog
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(catalog);
    }
}
