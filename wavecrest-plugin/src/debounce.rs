//! Deduplicating log emission
//!
//! Each log site passes an event key; a line for that key is emitted at most
//! once per [`DEBOUNCE_WINDOW`], regardless of call frequency. This bounds
//! log volume only. Under concurrent callers a line may double-fire; that is
//! accepted rather than prevented.

use crate::cache::TtlCache;
use std::time::Duration;

/// Suppression window for repeated identical log lines
pub const DEBOUNCE_WINDOW: Duration = Duration::from_secs(60);

/// Leveled log sink with per-key suppression
pub struct LogDebouncer {
    flags: TtlCache<()>,
    debug_enabled: bool,
}

impl LogDebouncer {
    /// Create a debouncer; `debug_enabled` gates debug-level emission globally
    pub fn new(debug_enabled: bool) -> Self {
        Self {
            flags: TtlCache::new(),
            debug_enabled,
        }
    }

    /// Emit a warning for the event key unless one fired within the window.
    /// Returns whether the line was emitted.
    pub fn warn_once(&self, key: &str, message: &str) -> bool {
        if self.flags.has(key) {
            return false;
        }
        tracing::warn!("{}", message);
        self.flags.put(key, (), DEBOUNCE_WINDOW);
        true
    }

    /// Emit a debug trace for the event key unless one fired within the
    /// window. Gated by the debug flag, independent of the per-key window.
    /// Returns whether the line was emitted.
    pub fn debug_once(&self, key: &str, message: &str) -> bool {
        if !self.debug_enabled || self.flags.has(key) {
            return false;
        }
        tracing::debug!("{}", message);
        self.flags.put(key, (), DEBOUNCE_WINDOW);
        true
    }

    /// Drop the suppression flag for an event key
    pub fn forget(&self, key: &str) {
        self.flags.forget(key);
    }
}
