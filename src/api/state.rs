//! Application state for the Attendance Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::AttendanceStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// record store and the loaded event configuration.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn AttendanceStore>,
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state from a store and configuration.
    pub fn new(store: impl AttendanceStore + 'static, config: ConfigLoader) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the record store.
    pub fn store(&self) -> &dyn AttendanceStore {
        self.store.as_ref()
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
