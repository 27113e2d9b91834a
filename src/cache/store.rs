//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU eviction and TTL expiration.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::cache::{CacheContext, CacheCounters, CacheEntry, CacheKey, CacheStats};

// == Cache Store ==
/// Request-keyed cache with LRU eviction and TTL support.
///
/// Not synchronized; wrap it in a [`QueryCache`](crate::cache::QueryCache)
/// to share it between tasks.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Entry storage
    entries: HashMap<CacheKey, CacheEntry<V>>,
    /// Operation number stamped on each insert and hit
    seq: u64,
    /// Lifetime counters
    counters: CacheCounters,
    /// Maximum number of entries allowed, 0 = caching disabled
    max_size: usize,
    /// TTL for entries stored without an override
    default_ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with specified capacity and default TTL.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries, 0 disables caching
    /// * `default_ttl` - TTL for entries without an explicit override
    pub fn new(max_size: usize, default_ttl: Duration) -> Self {
        info!(max_size, default_ttl_secs = default_ttl.as_secs_f64(), "Cache initialized");
        Self {
            entries: HashMap::new(),
            seq: 0,
            counters: CacheCounters::new(),
            max_size,
            default_ttl,
        }
    }

    // == Get ==
    /// Looks up the payload for `(primary, context)`.
    ///
    /// Returns a clone of the payload on a hit and bumps the entry's access
    /// bookkeeping. An expired entry is removed and reported as a miss.
    pub fn get(&mut self, primary: &str, context: Option<&CacheContext>) -> Option<V> {
        let key = CacheKey::derive(primary, context);
        self.get_by_key(&key)
    }

    fn get_by_key(&mut self, key: &CacheKey) -> Option<V> {
        let now = Instant::now();
        let default_ttl = self.default_ttl;

        let Some(entry) = self.entries.get_mut(key) else {
            debug!(key = %key.short(), "Cache miss");
            self.counters.record_miss();
            return None;
        };

        if entry.is_expired(default_ttl, now) {
            debug!(key = %key.short(), "Cache entry expired, removing");
            self.entries.remove(key);
            self.counters.record_expirations(1);
            self.counters.record_miss();
            return None;
        }

        self.seq += 1;
        entry.record_access(self.seq);
        let payload = entry.payload.clone();
        debug!(key = %key.short(), access_count = entry.access_count, "Cache hit");

        self.counters.record_hit();
        Some(payload)
    }

    // == Set ==
    /// Stores a payload for `(primary, context)`.
    ///
    /// Overwriting an existing key replaces the entry and resets its access
    /// count without growing the store. Inserting a new key into a full store
    /// first evicts the least recently used entry. Returns the derived key,
    /// also when caching is disabled and nothing was stored.
    ///
    /// # Arguments
    /// * `payload` - The value to cache
    /// * `ttl` - Optional TTL override (uses default_ttl if None)
    pub fn set(
        &mut self,
        primary: &str,
        context: Option<&CacheContext>,
        payload: V,
        ttl: Option<Duration>,
    ) -> CacheKey {
        let key = CacheKey::derive(primary, context);
        self.set_by_key(key, payload, ttl);
        key
    }

    fn set_by_key(&mut self, key: CacheKey, payload: V, ttl: Option<Duration>) {
        if self.max_size == 0 {
            debug!(key = %key.short(), "Caching disabled, payload not stored");
            return;
        }

        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_size {
            self.evict_lru();
        }

        self.seq += 1;
        self.entries.insert(key, CacheEntry::new(payload, ttl, self.seq));

        debug!(
            key = %key.short(),
            size = self.entries.len(),
            overwrite = is_overwrite,
            "Cached payload"
        );
    }

    // == Evict LRU ==
    /// Removes the entry with the oldest last access, ties going to the
    /// oldest insert; no-op on an empty store.
    fn evict_lru(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.recency())
            .map(|(key, _)| *key);

        if let Some(victim) = victim {
            self.entries.remove(&victim);
            self.counters.record_eviction();
            debug!(key = %victim.short(), "Evicted LRU entry");
        }
    }

    // == Clear ==
    /// Removes every entry and resets the lifetime counters.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.counters = CacheCounters::new();
        info!(removed, "Cache cleared");
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. Live entries are untouched.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Instant::now();
        let default_ttl = self.default_ttl;

        let expired_keys: Vec<CacheKey> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(default_ttl, now))
            .map(|(key, _)| *key)
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
        }

        let count = expired_keys.len();
        self.counters.record_expirations(count);

        if count > 0 {
            info!(removed = count, "Cleaned up expired cache entries");
        }
        count
    }

    // == Stats ==
    /// Point-in-time statistics over the live entries.
    pub fn stats(&self) -> CacheStats {
        CacheStats::from_entries(
            self.entries
                .values()
                .map(|entry| (entry.created_at, entry.access_count)),
            self.max_size,
            self.counters.clone(),
        )
    }

    // == Accessors ==
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}
