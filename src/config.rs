//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Byte bound of the demo group's store, 0 = unbounded
    pub cache_bytes: u64,
    /// Name of the demo group
    pub group_name: String,
    /// HTTP server port
    pub server_port: u16,
    /// Stats reporter interval in seconds, 0 = disabled
    pub stats_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_BYTES` - Store bound in bytes (default: 2048)
    /// - `GROUP_NAME` - Demo group name (default: scores)
    /// - `SERVER_PORT` - HTTP server port (default: 9999)
    /// - `STATS_INTERVAL` - Stats logging frequency in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_bytes: env::var("CACHE_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_bytes),
            group_name: env::var("GROUP_NAME")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.group_name),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            stats_interval: env::var("STATS_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.stats_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_bytes: 2 << 10,
            group_name: "scores".to_string(),
            server_port: 9999,
            stats_interval: 30,
        }
    }
}
