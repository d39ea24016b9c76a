//! Application state management
//!
//! This module provides the state every command runs against.
//!
//! # Design Principles
//!
//! 1. **Built once**: configuration is loaded and the store opened at startup
//! 2. **Immutable after creation**: commands only read the state

use crate::config::AppConfig;
use crate::store::FormStore;
use fitcalc_shared::UnitSystem;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Store for the last submitted form
    pub store: FormStore,
}

impl AppState {
    /// Create the state, opening the store the configuration points at
    pub fn new(config: AppConfig) -> Self {
        let store = FormStore::new(config.storage.path.clone(), config.storage.key.clone());
        Self { config, store }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the form store
    #[inline]
    pub fn store(&self) -> &FormStore {
        &self.store
    }

    /// Unit system used when a command does not specify one
    #[inline]
    pub fn default_unit_system(&self) -> UnitSystem {
        self.config.display.default_unit_system
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_store_follows_config() {
        let mut config = AppConfig::default();
        config.storage.path = PathBuf::from("/tmp/elsewhere.json");
        config.storage.key = "profile_b".to_string();

        let state = AppState::new(config);
        assert_eq!(state.store().path(), PathBuf::from("/tmp/elsewhere.json"));
        assert_eq!(state.store().key(), "profile_b");
        assert_eq!(state.default_unit_system(), UnitSystem::Metric);
    }
}
