//! In-memory TTL cache
//!
//! Process-local memoization store. Entries expire lazily: an expired entry
//! is reported as absent and dropped on the next access. Workers each hold
//! their own cache, so a cold cache in one worker is expected behavior.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> Entry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Generic key-value cache with per-entry time-to-live
pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, Entry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Check whether a live entry exists for the key
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Get the value for a key if present and not expired
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if !entry.is_expired(Instant::now()) => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a value under the key for the given duration
    pub fn put(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.lock().insert(key.into(), entry);
    }

    /// Drop the entry for a key, expired or not
    pub fn forget(&self, key: &str) {
        self.entries.lock().remove(key);
    }

    /// Return the cached value, producing and storing it on a miss
    pub fn remember(&self, key: &str, ttl: Duration, producer: impl FnOnce() -> V) -> V {
        if let Some(value) = self.get(key) {
            return value;
        }
        let value = producer();
        self.put(key, value.clone(), ttl);
        value
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_forget() {
        let cache: TtlCache<u32> = TtlCache::new();
        assert!(!cache.has("a"));

        cache.put("a", 1, Duration::from_secs(60));
        assert!(cache.has("a"));
        assert_eq!(cache.get("a"), Some(1));

        cache.forget("a");
        assert!(!cache.has("a"));
    }

    #[test]
    fn test_expiry() {
        let cache: TtlCache<u32> = TtlCache::new();
        cache.put("a", 1, Duration::ZERO);
        assert!(!cache.has("a"));
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn test_remember_produces_once() {
        let cache: TtlCache<Vec<String>> = TtlCache::new();
        let mut calls = 0;

        let first = cache.remember("list", Duration::from_secs(60), || {
            calls += 1;
            vec!["alpha".to_string()]
        });
        let second = cache.remember("list", Duration::from_secs(60), || {
            calls += 1;
            vec!["beta".to_string()]
        });

        assert_eq!(first, second);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_forget_forces_reproduction() {
        let cache: TtlCache<u32> = TtlCache::new();
        cache.remember("n", Duration::from_secs(60), || 1);
        cache.forget("n");
        let value = cache.remember("n", Duration::from_secs(60), || 2);
        assert_eq!(value, 2);
    }

    #[test]
    fn test_clear() {
        let cache: TtlCache<u32> = TtlCache::new();
        cache.put("a", 1, Duration::from_secs(60));
        cache.put("b", 2, Duration::from_secs(60));
        cache.clear();
        assert!(!cache.has("a"));
        assert!(!cache.has("b"));
    }
}
