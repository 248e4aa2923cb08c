//! Installed-plugins manifest
//!
//! The manifest is a JSON array of identifier strings at
//! `<resources_root>/plugins/installed.json`. Reads are memoized for 24
//! hours; [`ManifestStore::invalidate`] must be called when plugins are
//! installed or uninstalled, otherwise the stale list is served until the
//! entry expires. A missing or unparseable manifest degrades to an empty
//! list, which is cached for the full TTL like any other read.

use crate::cache::TtlCache;
use crate::debounce::LogDebouncer;
use std::path::PathBuf;
use std::time::Duration;

/// Cache key for the memoized manifest
pub const INSTALLED_PLUGINS_KEY: &str = "wavecrest_installed_plugins";

/// Memoization TTL for the manifest (24 hours)
pub const MANIFEST_TTL: Duration = Duration::from_secs(60 * 60 * 24);

/// Debounce key for the missing-manifest warning
pub(crate) const MANIFEST_NOT_FOUND_KEY: &str = "installed_json_not_found";

/// Cache-backed reader of the installed-plugins manifest
pub struct ManifestStore {
    path: PathBuf,
    cache: TtlCache<Vec<String>>,
}

impl ManifestStore {
    /// Create a store reading the manifest at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: TtlCache::new(),
        }
    }

    /// Return the installed plugin identifiers, in manifest order
    pub fn installed_plugins(&self, debouncer: &LogDebouncer) -> Vec<String> {
        self.cache
            .remember(INSTALLED_PLUGINS_KEY, MANIFEST_TTL, || {
                self.read_manifest(debouncer)
            })
    }

    fn read_manifest(&self, debouncer: &LogDebouncer) -> Vec<String> {
        if !self.path.is_file() {
            debouncer.warn_once(
                MANIFEST_NOT_FOUND_KEY,
                &format!("installed.json does not exist at: {}", self.path.display()),
            );
            return Vec::new();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debouncer.warn_once(
                    MANIFEST_NOT_FOUND_KEY,
                    &format!("failed to read {}: {}", self.path.display(), e),
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(plugins) => plugins,
            Err(e) => {
                debouncer.warn_once(
                    MANIFEST_NOT_FOUND_KEY,
                    &format!("invalid manifest at {}: {}", self.path.display(), e),
                );
                Vec::new()
            }
        }
    }

    /// Drop the memoized manifest so the next read hits the file
    pub fn invalidate(&self) {
        self.cache.forget(INSTALLED_PLUGINS_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_manifest_order() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("installed.json");
        std::fs::write(&path, r#"["billing", "dark-mode"]"#).unwrap();

        let store = ManifestStore::new(&path);
        let debouncer = LogDebouncer::new(false);
        assert_eq!(
            store.installed_plugins(&debouncer),
            vec!["billing".to_string(), "dark-mode".to_string()]
        );
    }

    #[test]
    fn test_missing_manifest_is_empty_and_warned_once() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ManifestStore::new(tmp.path().join("installed.json"));
        let debouncer = LogDebouncer::new(false);

        assert!(store.installed_plugins(&debouncer).is_empty());
        // The empty result was cached, and the warning flag is now set.
        assert!(!debouncer.warn_once(MANIFEST_NOT_FOUND_KEY, "again"));
    }

    #[test]
    fn test_invalid_json_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("installed.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = ManifestStore::new(&path);
        let debouncer = LogDebouncer::new(false);
        assert!(store.installed_plugins(&debouncer).is_empty());
    }

    #[test]
    fn test_memoized_within_ttl() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("installed.json");
        std::fs::write(&path, r#"["billing"]"#).unwrap();

        let store = ManifestStore::new(&path);
        let debouncer = LogDebouncer::new(false);
        assert_eq!(store.installed_plugins(&debouncer), vec!["billing"]);

        // A change on disk is not observed until the entry is invalidated.
        std::fs::write(&path, r#"["billing", "dark-mode"]"#).unwrap();
        assert_eq!(store.installed_plugins(&debouncer), vec!["billing"]);

        store.invalidate();
        assert_eq!(
            store.installed_plugins(&debouncer),
            vec!["billing", "dark-mode"]
        );
    }
}
