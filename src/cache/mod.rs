//! Cache Module
//!
//! Request-keyed in-memory caching with TTL expiration and LRU eviction.
//!
//! Callers present `(primary text, context)`; the key is derived internally.

mod context;
mod entry;
mod key;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use context::{
    response_primary, schema_fingerprint, CacheContext, RequestKind, KIND_FIELD,
    SCHEMA_HASH_FIELD,
};
pub use entry::CacheEntry;
pub use key::{canonical_bytes, normalize, CacheKey};
pub use shared::QueryCache;
pub use stats::{CacheCounters, CacheStats};
pub use store::CacheStore;
