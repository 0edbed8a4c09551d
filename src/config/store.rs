//! Thread-safe configuration storage.
//!
//! Holds the settings the running client changes (dark mode, accepted game
//! settings). Nothing here writes back to the config file.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
///
/// Allows multiple readers to access config concurrently while
/// supporting atomic updates when needed.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
}

impl ConfigStore {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply `f` to the config under the write lock.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Config),
    {
        let mut guard = self.inner.write();
        f(&mut guard);
    }
}
