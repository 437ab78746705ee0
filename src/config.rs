//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{EvictionPolicy, DEFAULT_THRESHOLD};
use crate::tasks::MAX_EVICTION_PERIOD;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache size above which an eviction tick removes one entry
    pub cache_threshold: usize,
    /// Seconds between eviction ticks
    pub eviction_interval: u64,
    /// How the evicted entry is chosen
    pub eviction_policy: EvictionPolicy,
    /// HTTP server port
    pub server_port: u16,
    /// Largest `count` accepted by the batch user endpoint
    pub max_batch_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_THRESHOLD` - Eviction threshold (default: 10000)
    /// - `EVICTION_INTERVAL` - Seconds between eviction ticks, non-zero (default: 5).
    ///   Values above one day (86400) are clamped to one day.
    /// - `EVICTION_POLICY` - `arbitrary` or `fifo` (default: arbitrary)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `MAX_BATCH_SIZE` - Max users per batch request (default: 100000)
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            cache_threshold: parse_var("CACHE_THRESHOLD").unwrap_or(defaults.cache_threshold),
            eviction_interval: parse_var::<u64>("EVICTION_INTERVAL")
                .filter(|secs| *secs > 0)
                .map(|secs| secs.min(MAX_EVICTION_PERIOD.as_secs()))
                .unwrap_or(defaults.eviction_interval),
            eviction_policy: parse_var("EVICTION_POLICY").unwrap_or(defaults.eviction_policy),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            max_batch_size: parse_var("MAX_BATCH_SIZE").unwrap_or(defaults.max_batch_size),
        }
    }

    /// Eviction interval as a Duration.
    pub fn eviction_period(&self) -> Duration {
        Duration::from_secs(self.eviction_interval)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_threshold: DEFAULT_THRESHOLD,
            eviction_interval: 5,
            eviction_policy: EvictionPolicy::Arbitrary,
            server_port: 8080,
            max_batch_size: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 5] = [
        "CACHE_THRESHOLD",
        "EVICTION_INTERVAL",
        "EVICTION_POLICY",
        "SERVER_PORT",
        "MAX_BATCH_SIZE",
    ];

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_threshold, 10_000);
        assert_eq!(config.eviction_interval, 5);
        assert_eq!(config.eviction_policy, EvictionPolicy::Arbitrary);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.max_batch_size, 100_000);
        assert_eq!(config.eviction_period(), Duration::from_secs(5));
    }

    // Single test touches the environment so parallel test threads don't race on it.
    #[test]
    fn test_config_from_env() {
        for var in VARS {
            env::remove_var(var);
        }

        let config = Config::from_env();
        assert_eq!(config.cache_threshold, 10_000);
        assert_eq!(config.eviction_interval, 5);
        assert_eq!(config.eviction_policy, EvictionPolicy::Arbitrary);
        assert_eq!(config.server_port, 8080);

        env::set_var("CACHE_THRESHOLD", "3");
        env::set_var("EVICTION_INTERVAL", "0");
        env::set_var("EVICTION_POLICY", "fifo");
        env::set_var("SERVER_PORT", "not-a-port");

        let config = Config::from_env();
        assert_eq!(config.cache_threshold, 3);
        assert_eq!(config.eviction_interval, 5);
        assert_eq!(config.eviction_policy, EvictionPolicy::Fifo);
        assert_eq!(config.server_port, 8080);

        env::set_var("EVICTION_INTERVAL", u64::MAX.to_string());
        let config = Config::from_env();
        assert_eq!(config.eviction_interval, 86_400);
        assert_eq!(config.eviction_period(), MAX_EVICTION_PERIOD);

        env::set_var("EVICTION_INTERVAL", "30");
        assert_eq!(Config::from_env().eviction_interval, 30);

        for var in VARS {
            env::remove_var(var);
        }
    }
}
