//! Cache Statistics Module
//!
//! Lifetime counters and the point-in-time stats snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cache Counters ==
/// Lifetime event counters, reset by `clear()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheCounters {
    /// Successful lookups
    pub hits: u64,
    /// Lookups that found nothing or found an expired entry
    pub misses: u64,
    /// Entries removed to respect `max_size`
    pub evictions: u64,
    /// Entries removed for outliving their TTL, lazily or by a sweep
    pub expirations: u64,
}

impl CacheCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }
}

// == Cache Stats ==
/// Snapshot of the store, taken under a single lock hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Live entries
    pub size: usize,
    /// Configured capacity
    pub max_size: usize,
    /// Sum of `access_count` over live entries
    pub total_accesses: u64,
    /// Average accesses per live entry (`total_accesses / size`).
    ///
    /// Not a hit/miss ratio; see `counters` for raw hits and misses.
    pub hit_rate: f64,
    /// Earliest `created_at` among live entries
    pub oldest_entry_timestamp: Option<DateTime<Utc>>,
    /// Latest `created_at` among live entries
    pub newest_entry_timestamp: Option<DateTime<Utc>>,
    pub counters: CacheCounters,
}

impl CacheStats {
    // == Constructor ==
    /// Builds the snapshot from the live entries' `(created_at, access_count)`.
    pub fn from_entries<I>(entries: I, max_size: usize, counters: CacheCounters) -> Self
    where
        I: IntoIterator<Item = (DateTime<Utc>, u64)>,
    {
        let mut size = 0usize;
        let mut total_accesses = 0u64;
        let mut oldest: Option<DateTime<Utc>> = None;
        let mut newest: Option<DateTime<Utc>> = None;

        for (created_at, access_count) in entries {
            size += 1;
            total_accesses += access_count;
            oldest = Some(oldest.map_or(created_at, |t| t.min(created_at)));
            newest = Some(newest.map_or(created_at, |t| t.max(created_at)));
        }

        Self {
            size,
            max_size,
            total_accesses,
            hit_rate: average_accesses(total_accesses, size),
            oldest_entry_timestamp: oldest,
            newest_entry_timestamp: newest,
            counters,
        }
    }
}

/// `total / size`, or 0.0 for an empty store.
fn average_accesses(total: u64, size: usize) -> f64 {
    if size == 0 {
        0.0
    } else {
        total as f64 / size as f64
    }
}
