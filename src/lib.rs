//! Query Cache - request-keyed response cache for LLM-backed query services
//!
//! Sits in front of expensive natural-language-to-SQL and result-to-prose
//! calls, with TTL expiration and LRU eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheContext, QueryCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_cleanup_task;
