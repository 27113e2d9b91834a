//! API Handlers
//!
//! HTTP request handlers for the cache lookup and administrative endpoints.

use std::time::Duration;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::cache::QueryCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    CleanupResponse, HealthResponse, LookupRequest, LookupResponse, MessageResponse,
    StatsResponse, StoreRequest, StoreResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache handle holding JSON payloads
    pub cache: QueryCache<Value>,
}

impl AppState {
    pub fn new(cache: QueryCache<Value>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(QueryCache::from_config(config))
    }
}

/// Handler for POST /cache/lookup
pub async fn lookup_handler(
    State(state): State<AppState>,
    Json(req): Json<LookupRequest>,
) -> Result<Json<LookupResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let payload = state.cache.get(&req.query, req.context.as_ref()).await;
    Ok(Json(LookupResponse::from_lookup(payload)))
}

/// Handler for PUT /cache/entries
pub async fn store_handler(
    State(state): State<AppState>,
    Json(req): Json<StoreRequest>,
) -> Result<Json<StoreResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let key = state
        .cache
        .set(
            &req.query,
            req.context.as_ref(),
            req.payload,
            req.ttl.map(Duration::from_secs),
        )
        .await;

    Ok(Json(StoreResponse::new(key.to_string())))
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.cache.stats().await))
}

/// Handler for POST /cache/clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.cache.clear().await;
    Json(MessageResponse::new("Cache cleared successfully"))
}

/// Handler for POST /cache/cleanup
pub async fn cleanup_handler(State(state): State<AppState>) -> Json<CleanupResponse> {
    let removed = state.cache.cleanup_expired().await;
    Json(CleanupResponse::new(removed))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
