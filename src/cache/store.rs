//! Cache Store Module
//!
//! Unbounded HashMap storage with a fixed TTL and lazy, read-triggered expiry.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage where every entry lives for the same fixed TTL.
///
/// There is no capacity bound and no background sweep: an expired entry
/// stays in the map until the next `get` for its key removes it.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Lifetime applied to every `set`
    ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store whose entries expire `ttl` after being set.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    // == Set ==
    /// Stores a value, overwriting any previous entry and resetting its expiry.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        debug!(key = %key, ttl_ms = self.ttl.as_millis() as u64, "cache set");
        self.entries.insert(key, CacheEntry::new(value, self.ttl));
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` if the key is missing or expired. Expired entries are
    /// removed as a side effect.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            None => {
                debug!(key, "cache miss");
                return None;
            }
            Some(entry) => entry.is_expired(),
        };

        if expired {
            self.entries.remove(key);
            debug!(key, "cache entry expired");
            return None;
        }

        debug!(key, "cache hit");
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Delete ==
    /// Removes an entry by key. Missing keys are a no-op.
    pub fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    // == TTL ==
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
