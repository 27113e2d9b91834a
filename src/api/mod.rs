//! API Module
//!
//! HTTP handlers and routing for the cache lookup and administrative surface.
//!
//! # Endpoints
//! - `POST /cache/lookup` - Look up a payload
//! - `PUT /cache/entries` - Store a payload
//! - `GET /cache/stats` - Cache statistics
//! - `POST /cache/clear` - Remove all entries
//! - `POST /cache/cleanup` - Remove expired entries
//! - `GET /health` - Health check

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
