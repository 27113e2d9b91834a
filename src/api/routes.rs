//! API Routes
//!
//! Configures the Axum router with the cache endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cleanup_handler, clear_handler, health_handler, lookup_handler, stats_handler,
    store_handler, AppState,
};

/// Creates the router with all cache endpoints.
///
/// # Endpoints
/// - `POST /cache/lookup` - Look up a payload by query and context
/// - `PUT /cache/entries` - Store a payload
/// - `GET /cache/stats` - Cache statistics
/// - `POST /cache/clear` - Remove all entries
/// - `POST /cache/cleanup` - Remove expired entries
/// - `GET /health` - Health check
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cache/lookup", post(lookup_handler))
        .route("/cache/entries", put(store_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/cache/clear", post(clear_handler))
        .route("/cache/cleanup", post(cleanup_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
