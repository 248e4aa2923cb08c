//! Application configuration
//!
//! These types represent the runtime configuration for Wavecrest.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration for Wavecrest
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Debug mode; gates debug-level plugin tracing
    #[serde(default)]
    pub debug: bool,

    /// Root of the application resources tree
    #[serde(default)]
    pub resources_root: PathBuf,
}

impl AppConfig {
    /// Create a configuration rooted at the given resources directory
    pub fn new(resources_root: impl Into<PathBuf>) -> Self {
        Self {
            debug: false,
            resources_root: resources_root.into(),
        }
    }

    /// Directory holding one subdirectory per installed plugin
    pub fn plugins_root(&self) -> PathBuf {
        self.resources_root.join("plugins")
    }

    /// Path of the installed-plugins manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.plugins_root().join("installed.json")
    }
}

/// Configuration loader for various formats
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match ext {
            "json" => Self::from_json(&content),
            "toml" => Self::from_toml(&content),
            _ => Err(Error::Config(format!("Unknown config format: {}", ext))),
        }
    }

    /// Parse JSON configuration
    pub fn from_json(content: &str) -> Result<AppConfig> {
        serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid JSON: {}", e)))
    }

    /// Parse TOML configuration
    pub fn from_toml(content: &str) -> Result<AppConfig> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_loading() {
        let json = r#"{"debug": true, "resources_root": "/srv/app/resources"}"#;
        let config = ConfigLoader::from_json(json).unwrap();
        assert!(config.debug);
        assert_eq!(
            config.manifest_path(),
            PathBuf::from("/srv/app/resources/plugins/installed.json")
        );
    }

    #[test]
    fn test_toml_loading() {
        let toml = "debug = false\nresources_root = \"resources\"\n";
        let config = ConfigLoader::from_toml(toml).unwrap();
        assert!(!config.debug);
        assert_eq!(config.plugins_root(), PathBuf::from("resources/plugins"));
    }

    #[test]
    fn test_defaults() {
        let config = ConfigLoader::from_json("{}").unwrap();
        assert!(!config.debug);
        assert_eq!(config.resources_root, PathBuf::new());
    }

    #[test]
    fn test_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.yaml");
        std::fs::write(&path, "debug: true").unwrap();
        assert!(ConfigLoader::load(&path).is_err());
    }
}
