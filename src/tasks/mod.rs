//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the cache is hosted.
//!
//! # Tasks
//! - TTL Cleanup: Sweeps expired cache entries at a configured interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
