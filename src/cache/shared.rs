//! Shared Cache Module
//!
//! Thread-safe handle over a [`CacheStore`], cloned into every component that
//! needs the cache.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheContext, CacheKey, CacheStats, CacheStore};
use crate::config::Config;

// == Query Cache ==
/// Cloneable handle to one cache instance.
///
/// Every operation holds the lock for its whole check-then-mutate sequence,
/// so concurrent callers never observe a half-updated entry. Lookups take the
/// write lock because hits update access bookkeeping and expired entries are
/// removed on the spot; `stats` only needs the read lock.
#[derive(Debug)]
pub struct QueryCache<V> {
    inner: Arc<RwLock<CacheStore<V>>>,
}

impl<V> Clone for QueryCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> QueryCache<V> {
    // == Constructors ==
    pub fn new(max_size: usize, default_ttl: Duration) -> Self {
        Self::from_store(CacheStore::new(max_size, default_ttl))
    }

    /// Builds the cache from `CACHE_MAX_SIZE` / `CACHE_DEFAULT_TTL` settings.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_size, config.default_ttl())
    }

    pub fn from_store(store: CacheStore<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    // == Operations ==
    pub async fn get(&self, primary: &str, context: Option<&CacheContext>) -> Option<V> {
        self.inner.write().await.get(primary, context)
    }

    pub async fn set(
        &self,
        primary: &str,
        context: Option<&CacheContext>,
        payload: V,
        ttl: Option<Duration>,
    ) -> CacheKey {
        self.inner.write().await.set(primary, context, payload, ttl)
    }

    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    pub async fn cleanup_expired(&self) -> usize {
        self.inner.write().await.cleanup_expired()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    // == Get Or Compute ==
    /// Returns the cached payload, or computes, stores and returns it.
    ///
    /// `compute` runs without the lock held, so a slow upstream call never
    /// blocks other callers. Two callers missing the same key at once may both
    /// compute; the later `set` wins. A failed computation is returned as-is
    /// and nothing is cached.
    pub async fn get_or_compute<F, Fut, E>(
        &self,
        primary: &str,
        context: Option<&CacheContext>,
        ttl: Option<Duration>,
        compute: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(cached) = self.get(primary, context).await {
            return Ok(cached);
        }

        let payload = compute().await?;
        self.set(primary, context, payload.clone(), ttl).await;
        debug!("Computed and cached payload on miss");
        Ok(payload)
    }
}
