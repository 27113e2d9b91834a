//! Response DTOs for the cache HTTP surface
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

/// Response body for POST /cache/lookup
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    pub hit: bool,
    /// Cached payload, null on a miss
    pub payload: Option<Value>,
}

impl LookupResponse {
    pub fn from_lookup(payload: Option<Value>) -> Self {
        Self {
            hit: payload.is_some(),
            payload,
        }
    }
}

/// Response body for PUT /cache/entries
#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    pub message: String,
    /// Hex cache key the payload was stored under
    pub key: String,
}

impl StoreResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            message: "Payload cached successfully".to_string(),
            key: key.into(),
        }
    }
}

/// Response body for GET /cache/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub cache_stats: CacheStats,
    pub status: String,
}

impl StatsResponse {
    pub fn new(cache_stats: CacheStats) -> Self {
        Self {
            cache_stats,
            status: "healthy".to_string(),
        }
    }
}

/// Response body for POST /cache/clear and other plain acknowledgements
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for POST /cache/cleanup
#[derive(Debug, Clone, Serialize)]
pub struct CleanupResponse {
    pub message: String,
    pub removed_entries: usize,
}

impl CleanupResponse {
    pub fn new(removed_entries: usize) -> Self {
        Self {
            message: "Cache cleanup completed".to_string(),
            removed_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
