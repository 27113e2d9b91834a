//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// A stored payload plus its bookkeeping metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached payload, opaque to the cache
    pub payload: V,
    /// Wall-clock insertion time
    pub created_at: DateTime<Utc>,
    /// Wall-clock time of the most recent hit, initialized to `created_at`
    pub last_accessed_at: DateTime<Utc>,
    /// Number of hits since insertion
    pub access_count: u64,
    /// Per-entry TTL override, None = store default
    pub ttl: Option<Duration>,
    /// Monotonic insertion instant used for age checks
    born: Instant,
    /// Monotonic instant of the most recent hit, initialized to `born`
    touched: Instant,
    /// Store-wide operation number of the insert or latest hit
    seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a fresh entry with `access_count = 0`.
    ///
    /// # Arguments
    /// * `payload` - The value to store
    /// * `ttl` - Optional TTL override
    /// * `seq` - The owning store's operation number for this insert
    pub fn new(payload: V, ttl: Option<Duration>, seq: u64) -> Self {
        let now = Utc::now();
        let born = Instant::now();
        Self {
            payload,
            created_at: now,
            last_accessed_at: now,
            access_count: 0,
            ttl,
            born,
            touched: born,
            seq,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived its TTL at `now`.
    ///
    /// The only expiry predicate in the crate: lazy expiry on read and the
    /// sweep both call it. Expired means `age > ttl`, and a zero TTL is
    /// expired immediately.
    pub fn is_expired(&self, default_ttl: Duration, now: Instant) -> bool {
        let ttl = self.ttl.unwrap_or(default_ttl);
        ttl.is_zero() || self.age(now) > ttl
    }

    /// Time elapsed since insertion, saturating at zero.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.born)
    }

    // == Record Access ==
    /// Bumps `access_count` and `last_accessed_at` on a hit.
    pub fn record_access(&mut self, seq: u64) {
        self.access_count += 1;
        self.last_accessed_at = Utc::now();
        self.touched = Instant::now();
        self.seq = seq;
    }

    // == Recency ==
    /// Eviction order key: last access, then creation, smallest first.
    ///
    /// Read on the monotonic clock so wall-clock jumps cannot reorder
    /// entries. `seq` settles entries whose instants compare equal.
    pub fn recency(&self) -> (Instant, Instant, u64) {
        (self.touched, self.born, self.seq)
    }
}
