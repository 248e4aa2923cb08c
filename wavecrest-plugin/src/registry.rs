//! Plugin factory registry
//!
//! Plugins are compiled into the application; the host populates this table
//! at initialization time, mapping each plugin's fully-qualified type name to
//! a constructor. Resolution of a descriptor on disk with no matching entry
//! here is the "plugin class not found" case.

use crate::traits::{HostApp, Plugin};
use std::collections::HashMap;
use std::sync::Arc;
use wavecrest_core::Result;

/// Constructor for a plugin, given the host application handle
pub type PluginFactory = Box<dyn Fn(Arc<dyn HostApp>) -> Result<Arc<dyn Plugin>> + Send + Sync>;

/// Registry of plugin factories keyed by fully-qualified type name
pub struct PluginRegistry {
    factories: HashMap<String, PluginFactory>,
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory under a type name, replacing any previous entry
    pub fn register<F>(&mut self, type_name: impl Into<String>, factory: F)
    where
        F: Fn(Arc<dyn HostApp>) -> Result<Arc<dyn Plugin>> + Send + Sync + 'static,
    {
        let type_name = type_name.into();
        tracing::debug!("Registering plugin factory: {}", type_name);
        self.factories.insert(type_name, Box::new(factory));
    }

    /// Look up the factory for a type name
    pub fn factory(&self, type_name: &str) -> Option<&PluginFactory> {
        self.factories.get(type_name)
    }

    /// Check whether a factory is registered for a type name
    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// List all registered type names
    pub fn type_names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
