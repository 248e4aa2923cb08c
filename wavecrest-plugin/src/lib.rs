//! Wavecrest Plugin System
//!
//! Discovers installed plugins from a manifest, resolves their on-disk
//! descriptors by naming convention, constructs them through a statically
//! populated factory registry and registers them with the host application.

mod cache;
mod debounce;
mod manager;
mod manifest;
mod registry;
mod resolver;
mod traits;

pub use cache::TtlCache;
pub use debounce::{DEBOUNCE_WINDOW, LogDebouncer};
pub use manager::PluginManager;
pub use manifest::{INSTALLED_PLUGINS_KEY, MANIFEST_TTL, ManifestStore};
pub use registry::{PluginFactory, PluginRegistry};
pub use resolver::{NAMESPACE_PREFIX, PLUGIN_FILE_EXT, PluginResolver, studly};
pub use traits::{HostApp, Plugin, PluginInfo};
