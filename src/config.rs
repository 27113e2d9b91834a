//! Configuration Module
//!
//! Handles loading and managing cache and server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Cache and server configuration parameters.
///
/// Read once at startup; the cache does not re-read it afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cache entries, 0 disables caching
    pub max_size: usize,
    /// Default TTL in seconds, 0 makes entries stale immediately
    pub default_ttl_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds, 0 disables the sweeper
    pub cleanup_interval_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 500)
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds (default: 1800)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    ///
    /// Missing or unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_size: env_or("CACHE_MAX_SIZE", defaults.max_size),
            default_ttl_secs: env_or("CACHE_DEFAULT_TTL", defaults.default_ttl_secs),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval_secs: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval_secs),
        }
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }

    /// Sweep interval, None when the sweeper is disabled.
    pub fn cleanup_interval(&self) -> Option<Duration> {
        (self.cleanup_interval_secs > 0).then(|| Duration::from_secs(self.cleanup_interval_secs))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: 500,
            default_ttl_secs: 1800,
            server_port: 8000,
            cleanup_interval_secs: 60,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
