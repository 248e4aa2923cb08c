//! Plugin manager
//!
//! Orchestrates the load sequence: fetch the manifest, resolve each entry's
//! descriptor, construct through the factory registry and hand the instance
//! to the host. Every per-plugin failure is logged (debounced) and skipped;
//! no single plugin aborts the remaining entries.

use crate::debounce::LogDebouncer;
use crate::manifest::{MANIFEST_NOT_FOUND_KEY, ManifestStore};
use crate::registry::PluginRegistry;
use crate::resolver::PluginResolver;
use crate::traits::{HostApp, Plugin};
use std::collections::HashMap;
use std::sync::Arc;
use wavecrest_core::{AppConfig, Result};

const PLUGINS_LOADED_KEY: &str = "plugins_loaded_recently";

/// Debounce keys tied to a single plugin identifier
const PER_PLUGIN_KEYS: [&str; 5] = [
    "plugin_file_not_found_",
    "plugin_class_not_found_",
    "plugin_construct_failed_",
    "plugin_register_failed_",
    "plugin_loaded_recently_",
];

/// Discovers, constructs and registers installed plugins
pub struct PluginManager {
    host: Arc<dyn HostApp>,
    registry: PluginRegistry,
    resolver: PluginResolver,
    manifest: ManifestStore,
    debouncer: LogDebouncer,
    plugins: HashMap<String, Arc<dyn Plugin>>,
}

impl PluginManager {
    /// Create a manager for the given host, configuration and factory table
    pub fn new(host: Arc<dyn HostApp>, config: &AppConfig, registry: PluginRegistry) -> Self {
        Self {
            host,
            registry,
            resolver: PluginResolver::new(config.plugins_root()),
            manifest: ManifestStore::new(config.manifest_path()),
            debouncer: LogDebouncer::new(config.debug),
            plugins: HashMap::new(),
        }
    }

    /// Load every plugin named in the manifest.
    ///
    /// Processes entries in manifest order. Unresolvable, unregistered or
    /// failing plugins are skipped with a debounced warning; the rest of the
    /// manifest is still processed. Duplicate identifiers are constructed
    /// and registered once per occurrence, last instance wins in the record.
    pub fn load_plugins(&mut self) {
        let installed = self.manifest.installed_plugins(&self.debouncer);

        self.debouncer.debug_once(
            PLUGINS_LOADED_KEY,
            &format!("Loading installed plugins: {:?}", installed),
        );

        for name in installed {
            let type_name = self.resolver.type_name_for(&name);

            if self.resolver.resolve(&name).is_none() {
                self.debouncer.warn_once(
                    &format!("plugin_file_not_found_{name}"),
                    &format!("Plugin file not found for: {name}"),
                );
                continue;
            }

            let Some(factory) = self.registry.factory(&type_name) else {
                self.debouncer.warn_once(
                    &format!("plugin_class_not_found_{name}"),
                    &format!("Plugin class not found after resolving file: {type_name}"),
                );
                continue;
            };

            let plugin = match factory(self.host.clone()) {
                Ok(plugin) => plugin,
                Err(e) => {
                    self.debouncer.warn_once(
                        &format!("plugin_construct_failed_{name}"),
                        &format!("Failed to construct plugin {type_name}: {e}"),
                    );
                    continue;
                }
            };

            self.plugins.insert(name.clone(), plugin.clone());

            if let Err(e) = self.host.register(plugin) {
                self.debouncer.warn_once(
                    &format!("plugin_register_failed_{name}"),
                    &format!("Failed to register plugin {type_name}: {e}"),
                );
                continue;
            }

            self.debouncer.debug_once(
                &format!("plugin_loaded_recently_{name}"),
                &format!("Loaded plugin: {type_name}"),
            );
        }
    }

    /// Run a plugin's post-activation hook, exactly once, no retry.
    ///
    /// Errors propagate to the caller.
    pub fn run_post_activation_commands(&self, plugin: &Arc<dyn Plugin>) -> Result<()> {
        plugin.post_activation()
    }

    /// Invalidate the memoized manifest and the debounce flags of every
    /// loaded plugin. Call whenever plugins are installed or uninstalled.
    pub fn clear_plugins_cache(&self) {
        self.manifest.invalidate();
        self.debouncer.forget(PLUGINS_LOADED_KEY);
        self.debouncer.forget(MANIFEST_NOT_FOUND_KEY);

        for name in self.plugins.keys() {
            for prefix in PER_PLUGIN_KEYS {
                self.debouncer.forget(&format!("{prefix}{name}"));
            }
        }
    }

    /// Get a loaded plugin by identifier
    pub fn plugin(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.get(name).cloned()
    }

    /// Check whether an identifier was loaded
    pub fn is_loaded(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Identifiers of all loaded plugins, sorted
    pub fn loaded_plugins(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.plugins.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
