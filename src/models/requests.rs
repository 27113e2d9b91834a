//! Request DTOs for the cache HTTP surface
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::CacheContext;

/// Request body for POST /cache/lookup
#[derive(Debug, Clone, Deserialize)]
pub struct LookupRequest {
    /// Primary request text (natural-language query or response key)
    pub query: String,
    /// Optional disambiguating context
    #[serde(default)]
    pub context: Option<CacheContext>,
}

impl LookupRequest {
    pub fn validate(&self) -> Option<String> {
        validate_query(&self.query)
    }
}

/// Request body for PUT /cache/entries
///
/// # Fields
/// - `query`: Primary request text
/// - `context`: Optional disambiguating context
/// - `payload`: Any JSON value to cache
/// - `ttl`: Optional TTL override in seconds
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRequest {
    pub query: String,
    #[serde(default)]
    pub context: Option<CacheContext>,
    pub payload: Value,
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl StoreRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_query(&self.query)
    }
}

fn validate_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return Some("Query cannot be empty".to_string());
    }
    None
}
