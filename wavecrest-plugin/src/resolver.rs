//! Plugin resolution
//!
//! Maps a plugin identifier to its on-disk descriptor and to the
//! fully-qualified type name its factory is registered under. Directory
//! names are matched case-insensitively so a manifest entry `darkmode`
//! still finds a `DarkMode` directory.

use std::fs;
use std::path::PathBuf;

/// Namespace root for plugin type names
pub const NAMESPACE_PREFIX: &str = "wavecrest::plugins";

/// Extension of the per-plugin descriptor file
pub const PLUGIN_FILE_EXT: &str = "toml";

/// Convert an identifier to Pascal/studly case: `dark-mode` -> `DarkMode`
pub fn studly(identifier: &str) -> String {
    identifier
        .split(['-', '_', ' '])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Locates plugin descriptors under the plugins root
pub struct PluginResolver {
    root: PathBuf,
}

impl PluginResolver {
    /// Create a resolver over the given plugins root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Find the descriptor file for an identifier.
    ///
    /// Probes the exact-case path `<root>/<Canonical>/<Canonical>Plugin.toml`
    /// first, then scans immediate subdirectories for a case-insensitive
    /// match on the raw identifier. First matching directory wins; returns
    /// `None` when no candidate file exists.
    pub fn resolve(&self, identifier: &str) -> Option<PathBuf> {
        let canonical = studly(identifier);
        let file_name = format!("{canonical}Plugin.{PLUGIN_FILE_EXT}");

        let exact = self.root.join(&canonical).join(&file_name);
        if exact.is_file() {
            return Some(exact);
        }

        let entries = fs::read_dir(&self.root).ok()?;
        for entry in entries.flatten() {
            if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.eq_ignore_ascii_case(identifier));
            if matches {
                let candidate = entry.path().join(&file_name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }

        None
    }

    /// Derive the fully-qualified type name for an identifier.
    ///
    /// Independent of filesystem state; this is the key the plugin's factory
    /// must be registered under.
    pub fn type_name_for(&self, identifier: &str) -> String {
        let canonical = studly(identifier);
        format!("{NAMESPACE_PREFIX}::{canonical}::{canonical}Plugin")
    }
}
