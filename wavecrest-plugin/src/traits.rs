//! Plugin traits

use std::sync::Arc;
use wavecrest_core::Result;

/// Plugin information
#[derive(Debug, Clone)]
pub struct PluginInfo {
    /// Plugin name
    pub name: String,
    /// Plugin version
    pub version: String,
    /// Plugin description
    pub description: String,
}

/// Main plugin trait
pub trait Plugin: Send + Sync {
    /// Get plugin information
    fn info(&self) -> PluginInfo;

    /// Run once after the plugin has been registered with the host
    fn post_activation(&self) -> Result<()> {
        Ok(())
    }
}

/// Host application seam: the service container that receives plugins
pub trait HostApp: Send + Sync {
    /// Register a plugin with the host's service container
    fn register(&self, plugin: Arc<dyn Plugin>) -> Result<()>;
}
